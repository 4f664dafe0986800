fn main() {
    clawdeploy::app::cli::run();
}
