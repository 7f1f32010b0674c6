#[cfg(target_os = "windows")]
mod windows_main;

fn main() {
    #[cfg(target_os = "windows")]
    windows_main::run();

    #[cfg(not(target_os = "windows"))]
    {
        eprintln!("curswitch only runs on Windows; cursor schemes live in the registry.");
        std::process::exit(1);
    }
}
