use bookhref::{
    build_book_path_with, build_relative_path, longest_common_path, quote_iri,
    resolve_relative_segments_with, starting_dir, unquote_iri, HrefError, HrefResult,
    ResolveOptions,
};
use std::env;
use std::fs;
use std::process;

fn print_usage() {
    eprintln!("Usage: bookhref-demo [--strict] [--config <options.yaml>] [command] [args...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  resolve <path>            resolve '.' and '..' segments");
    eprintln!("  relative <from> <to>      relative href between two book paths");
    eprintln!("  bookpath <href> <start>   book path of an href relative to a folder");
    eprintln!("  startdir <path>           containing directory of a book path");
    eprintln!("  common <paths...>         longest common directory");
    eprintln!("  quote <href>              percent-encode as an IRI");
    eprintln!("  unquote <href>            decode percent escapes");
    eprintln!();
    eprintln!("Without a command, runs the built-in examples.");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut options = ResolveOptions::default();
    let mut rest: Vec<String> = Vec::new();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => options = ResolveOptions::strict(),
            "--config" => {
                let Some(path) = args.next() else {
                    print_usage();
                    process::exit(1);
                };
                match load_options(&path) {
                    Ok(loaded) => options = loaded,
                    Err(e) => {
                        eprintln!("✗ {}", e);
                        process::exit(1);
                    }
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => rest.push(arg),
        }
    }

    let result = if rest.is_empty() {
        run_examples(&options)
    } else {
        run_command(&rest, &options)
    };

    if let Err(e) = result {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn load_options(path: &str) -> HrefResult<ResolveOptions> {
    let content = fs::read_to_string(path)
        .map_err(|e| HrefError::Config(format!("Failed to read '{}': {}", path, e)))?;
    ResolveOptions::from_yaml(&content)
}

fn run_command(args: &[String], options: &ResolveOptions) -> HrefResult<()> {
    let arg = move |i: usize| args.get(i).map(String::as_str);

    let output = match (arg(0), arg(1), arg(2)) {
        (Some("resolve"), Some(path), None) => resolve_relative_segments_with(path, options)?,
        (Some("relative"), Some(from), Some(to)) => build_relative_path(from, to),
        (Some("bookpath"), Some(href), Some(start)) => build_book_path_with(href, start, options)?,
        (Some("bookpath"), Some(href), None) => build_book_path_with(href, "", options)?,
        (Some("startdir"), Some(path), None) => starting_dir(path),
        (Some("common"), _, _) => longest_common_path(&args[1..]),
        (Some("quote"), Some(href), None) => quote_iri(href),
        (Some("unquote"), Some(href), None) => unquote_iri(href),
        _ => {
            print_usage();
            process::exit(1);
        }
    };

    println!("\"{}\"", output);
    Ok(())
}

fn run_examples(options: &ResolveOptions) -> HrefResult<()> {
    let p = "This/is/the/../../end.txt";
    println!("resolve_relative_segments({:?})", p);
    println!("    {:?}", resolve_relative_segments_with(p, options)?);

    for (from, to) in [
        ("hello.txt", "goodbye.txt"),
        ("OEBPS/Text/book1/chapter1.xhtml", "OEBPS/Text/book2/chapter1.xhtml"),
        ("OEBPS/package.opf", "OEBPS/Text/book1/chapter1.xhtml"),
    ] {
        println!("build_relative_path({:?}, {:?})", from, to);
        println!("    {:?}", build_relative_path(from, to));
    }

    for (href, start) in [("../../Images/image.png", "OEBPS/Text/book1/"), ("image.png", "")] {
        println!("build_book_path({:?}, {:?})", href, start);
        println!("    {:?}", build_book_path_with(href, start, options)?);
    }

    let p = "content.opf";
    println!("starting_dir({:?})", p);
    println!("    {:?}", starting_dir(p));

    let paths = [
        "OEBPS/book1/text/chapter1.xhtml",
        "OEBPS/book1/html/chapter2.xhtml",
        "OEBPS/book2/text/chapter3.xhtml",
    ];
    println!("longest_common_path({:?})", paths);
    println!("    {:?}", longest_common_path(paths));

    let href = "http://example.com/Text/chapitre été?.xhtml";
    let quoted = quote_iri(href);
    println!("quote_iri({:?})", href);
    println!("    {:?}", quoted);
    println!("unquote_iri({:?})", quoted);
    println!("    {:?}", unquote_iri(&quoted));

    Ok(())
}
