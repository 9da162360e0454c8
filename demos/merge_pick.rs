use parq::{ParamMap, QueryCodec};

fn main() {
    let codec = QueryCodec::new();

    // The target map normally comes from the HTTP layer's request parameters.
    let target: ParamMap = [("page", "1"), ("search", "choi")].into_iter().collect();

    // Merge: overlay a fragment onto the target.
    println!("{}", codec.merge(Some(&target), "mode=save", false)); // page=1&search=choi&mode=save
    println!("{}", codec.merge(Some(&target), "mode=save&search=", false)); // page=1&mode=save

    // Pick: keep only the named parameters, filling blanks from the target.
    println!("{}", codec.pick(Some(&target), "page=&mode=save")); // page=1&mode=save

    // Dispatch by name, as a template helper would.
    match codec.apply("merge", Some(&target), "?mode=save") {
        Ok(result) => println!("{result}"), // ?page=1&search=choi&mode=save
        Err(err) => eprintln!("{err}"),
    }
}
