use std::io::{self, Write};

use fillbench::{format_elapsed, measure_cpu, run};

fn main() -> io::Result<()> {
    let (passes, elapsed) = measure_cpu(run)?;
    std::hint::black_box(passes);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_elapsed(elapsed))?;
    Ok(())
}
