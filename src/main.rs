use std::process;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(err) = slidesmith::run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
