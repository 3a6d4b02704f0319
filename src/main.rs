use std::io::{self, Write};
use std::process::ExitCode;

use selection_sort::display::{render_values, write_values};
use selection_sort::{logging, selection_sort_counted, Result};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};

const SAMPLE: [i32; 7] = [3, 8, 15, 10, 1, 2, 3];

fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut values = SAMPLE;

    write_values(out, &values)?;
    let stats = selection_sort_counted(&mut values);
    let sorted = render_values(&values)?;
    debug!(
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        sorted = sorted.trim_end(),
        "sorted"
    );
    write_values(out, &values)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    logging::init(LevelFilter::WARN);

    let stdout = io::stdout();
    match run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_before_and_after() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "3 8 15 10 1 2 3 \n1 2 3 3 8 10 15 \n"
        );
    }
}
