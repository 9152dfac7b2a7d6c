fn main() {
    explorer_path::cli::run();
}
