use argschema::Args;

fn main() {
    let args = Args::parse("v,p#,d*");
    let verbose = args.get_boolean('v').unwrap();
    let port = args.get_integer('p').unwrap();
    let directory = args.get_string('d').unwrap();

    if verbose {
        println!("Serving '{directory}' on port {port} (verbose).");
    } else {
        println!("Serving '{directory}' on port {port}.");
    }
}
