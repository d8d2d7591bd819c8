mod app;
mod cli_args;
mod config;
mod report;
mod runner;

fn main() {
    proc_exit::exit(app::run());
}
