use std::{fs, path::Path};

fn main() {
    // the frontend bundle is embedded, make sure the folder exists before
    // trunk has built it
    let path = "../frontend/dist";
    if !Path::new(&path).exists() {
        fs::create_dir_all(path).expect("Could not create a frontend/dist folder");
    }
}
