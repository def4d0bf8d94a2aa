use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use imgconv::ImageFormat;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        let prog = args.first().map(String::as_str).unwrap_or("imgconv");
        eprintln!("Usage: {prog} <in_file> <out_file>");
        return ExitCode::from(1);
    }

    let in_path = PathBuf::from(&args[1]);
    let out_path = PathBuf::from(&args[2]);

    let Some(in_format) = ImageFormat::from_path(&in_path) else {
        eprintln!("Unknown format of the input file");
        return ExitCode::from(2);
    };
    let Some(out_format) = ImageFormat::from_path(&out_path) else {
        eprintln!("Unknown format of the output file");
        return ExitCode::from(3);
    };

    let image = match in_format.load(&in_path) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("Loading failed: {err}");
            return ExitCode::from(4);
        }
    };

    if let Err(err) = out_format.save(&out_path, &image) {
        eprintln!("Saving failed: {err}");
        return ExitCode::from(5);
    }

    println!("Successfully converted");
    ExitCode::SUCCESS
}
