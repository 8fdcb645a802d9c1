/// Prints the grip logo with version, used by start and doctor.
pub fn print_logo() {
    let c = "\x1b[95m"; // Bright magenta
    let d = "\x1b[90m"; // Dim gray
    let r = "\x1b[0m";
    let v = env!("CARGO_PKG_VERSION");

    let ver = format!("v{v}");
    let pad = " ".repeat(18_usize.saturating_sub(ver.len()));

    println!();
    println!("  {c}█▀▀▀ █▀▀█ ▀█▀ █▀▀█{r}");
    println!("  {c}█ ▀█ █▄▄▀  █  █▄▄█{r}");
    println!("  {c}▀▀▀▀ ▀  ▀ ▀▀▀ ▀{r}");
    println!("{pad}{d}{ver}{r}");
}
