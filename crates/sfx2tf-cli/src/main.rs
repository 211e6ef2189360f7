// sfx2tf CLI entry point

use sfx2tf_cli::{output, router::CommandRouter, VerbosityLevel};

#[tokio::main]
async fn main() {
    if let Err(e) = CommandRouter::route().await {
        if VerbosityLevel::Verbose.should_output() {
            let style = output::OutputStyle::default();
            eprintln!("{}", style.error_verbose(&e.user_message(), &e.technical_details()));
        } else {
            output::print_error(&e.user_message());
        }
        std::process::exit(1);
    }
}
