// build.rs
fn main() {
    println!("cargo:rerun-if-changed=assets/currency.ico");

    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/currency.ico");
        res.set("FileDescription", "Currency formatter");
        if let Err(e) = res.compile() {
            println!("cargo:warning=icon resource not embedded: {e}");
        }
    }
}
