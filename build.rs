fn main() {
    // Only compile Windows resources on Windows target
    #[cfg(target_os = "windows")]
    {
        // Embed the Windows resource file (app icon, reused as the tray icon)
        let _ = embed_resource::compile("resources/windows/curswitch.rc", embed_resource::NONE);
    }
}
