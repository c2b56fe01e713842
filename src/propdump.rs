use tracing::{debug, error};

use propdump::printer;
use propdump::properties::PropertyTable;

const PROPERTIES_FILE: &str = "debug.properties";

// One-shot debug tool: load the properties file next to the process, print a
// listing and a one-line dump to stdout. Failures collapse into a single
// generic stdout message and the process still exits 0, so diagnostics go to
// stderr via tracing instead.
fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout();
    match PropertyTable::load(PROPERTIES_FILE) {
        Ok(table) => {
            debug!("loaded {} entries from {}", table.len(), PROPERTIES_FILE);
            if let Err(e) = printer::write_listing(&mut stdout, &table)
                .and_then(|()| printer::write_dump(&mut stdout, &table))
            {
                error!("Failed to write to stdout: {}", e);
            }
        }
        Err(e) => {
            error!("Failed to load {}: {}", PROPERTIES_FILE, e);
            println!("Some error occurred");
        }
    }
    std::io::Write::flush(&mut stdout).unwrap(); // stdout flush failures are unrecoverable
}
