use bwt_lzw_pack::pipeline;
use clap::{arg, crate_version, ArgGroup, Command};
use std::io::Write;
use std::path::PathBuf;

const RCH: &str = "unreachable was reached";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let long_help =
"Examples:
---------
Compress:      `bwt-lzw-pack -c my_input my_output`
Decompress:    `bwt-lzw-pack -d my_output my_input`";

    let main_cmd = Command::new("bwt-lzw-pack")
        .about("Compress and decompress with a BWT + MTF + LZW pipeline")
        .after_long_help(long_help)
        .version(crate_version!())
        .arg(arg!(-c --compress "compress the input file").required(false))
        .arg(arg!(-d --decompress "decompress the input file").required(false))
        .group(ArgGroup::new("mode").args(["compress", "decompress"]).required(true))
        .arg(arg!(<INPUT> "input file path"))
        .arg(arg!(<OUTPUT> "output file path"));

    let matches = main_cmd.get_matches();

    let path_in = PathBuf::from(matches.get_one::<String>("INPUT").expect(RCH));
    let path_out = PathBuf::from(matches.get_one::<String>("OUTPUT").expect(RCH));

    if !path_in.is_file() {
        eprintln!("{} does not exist", path_in.display());
        std::process::exit(1);
    }

    if path_out.exists() && !confirm_overwrite(&path_out) {
        eprintln!("refused to overwrite {}", path_out.display());
        std::process::exit(1);
    }

    if matches.get_flag("compress") {
        pipeline::compress(&path_in, &path_out)?;
    } else {
        pipeline::decompress(&path_in, &path_out)?;
    }

    Ok(())
}

/// Ask the user before clobbering an existing output file.
fn confirm_overwrite(path: &std::path::Path) -> bool {
    print!("{} already exists, overwrite? [y/N] ", path.display());
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
