pub fn run() -> proc_exit::ExitResult {
    let cli_args = crate::cli_args::parse();

    let config = match crate::config::resolve(&cli_args) {
        Ok(config) => config,
        Err(err) => {
            // Fail fast, before any command execution begins.
            return Err(proc_exit::Exit::new(proc_exit::Code::new(2))
                .with_message(format!("{}\n{}", err, crate::cli_args::usage())));
        }
    };

    let records = match crate::runner::run(&config) {
        Ok(records) => records,
        Err(err) => {
            return Err(
                proc_exit::Exit::new(proc_exit::Code::FAILURE).with_message(format!("{:#}", err))
            );
        }
    };

    crate::report::Report::from_records(&records).print();
    Ok(())
}
