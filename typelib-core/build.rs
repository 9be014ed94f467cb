fn main() {
    #[cfg(feature = "capi")]
    {
        let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
        let config = cbindgen::Config::from_root_or_default(&crate_dir);
        match cbindgen::Builder::new().with_crate(&crate_dir).with_config(config).generate() {
            Ok(bindings) => {
                bindings.write_to_file("include/typelib_core.h");
            },
            Err(err) => {
                println!("cargo:warning=cbindgen failed to generate bindings: {err}");
            },
        }
    }
}
