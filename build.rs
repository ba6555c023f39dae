fn main() {
    // Embed Windows icon
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("angelkellogg.ico");
        res.compile().unwrap();
    }
}
