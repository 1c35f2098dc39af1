fn main() {
    slsgen::app::cli::run();
}
