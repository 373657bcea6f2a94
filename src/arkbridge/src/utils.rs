mod io;
pub use io::*;

mod output;
pub use output::*;
