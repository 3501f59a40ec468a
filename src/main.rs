use leadboard::cli::run;
use leadboard::data::IngestError;

fn main() {
    env_logger::init();
    #[cfg(windows)]
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        // Unreadable or corrupt lead data is an internal error; everything else is user error
        let internal = e
            .chain()
            .any(|cause| cause.is::<IngestError>() || cause.is::<std::io::Error>());
        if internal {
            eprintln!("Internal error: {}", e);
            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut indent = 1;
                while let Some(err) = source {
                    eprintln!("{:indent$}  {}", "", err);
                    source = err.source();
                    indent += 1;
                }
            }
            std::process::exit(2);
        } else {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
