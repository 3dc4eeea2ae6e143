use hostsedit::error::HostsError;

fn main() {
    hostsedit::logging::init();
    if let Err(e) = hostsedit::cli::run() {
        eprintln!("Error: {e}");
        let code = e.downcast_ref::<HostsError>().map_or(1, HostsError::exit_code);
        std::process::exit(code);
    }
}
