use aoc2020_warmup::password;

#[cfg(feature = "with_dhat")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "with_dhat")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

fn main() {
    #[cfg(feature = "with_dhat")]
    let _dhat = Dhat::start_heap_profiling();

    aoc2020_warmup::init_tracing();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = password::run(stdin.lock(), stdout.lock()) {
        aoc2020_warmup::report("day02", &e);
        std::process::exit(1);
    }
}
