use clap::Parser;
use std::{
  fs,
  io::{self, Read},
  process::exit,
};
use vdffmt::{parse, to_document};

/// Format Valve KeyValues (VDF) contents
#[derive(Debug, Parser, PartialEq)]
#[command(version)]
struct Args {
  /// Print the string value at PATH (dot-separated keys) instead of formatting
  #[arg(long, value_name = "PATH")]
  get: Option<String>,

  /// Number of spaces per indent level
  #[arg(long, default_value_t = 2)]
  indent: usize,

  /// File to process, otherwise uses stdin/stdout
  file: Option<String>,
}

fn main() -> io::Result<()> {
  run(Args::parse())
}

fn run(args: Args) -> io::Result<()> {
  let mut input: String;
  if let Some(path) = args.file.as_ref() {
    input = fs::read_to_string(path)?;
  } else {
    input = String::new();
    io::stdin().read_to_string(&mut input)?;
  }

  match parse(&input) {
    Ok(root) => {
      if let Some(path) = args.get.as_ref() {
        let mut view = root.view();
        for key in path.split('.') {
          view = view.get(key);
        }
        println!("{}", view);
      } else {
        let output = to_document(&root, args.indent) + "\n";
        if let Some(path) = args.file.as_ref() {
          fs::write(path, output)?;
        } else {
          print!("{}", output)
        }
      }
    }
    Err(e) => {
      eprintln!("{}", e);
      exit(1);
    }
  }

  Ok(())
}

#[cfg(test)]
mod arg_tests {
  use crate::Args;
  use clap::Parser;

  #[test]
  fn can_parse_file_arg() {
    let args = Args::try_parse_from(["vdffmt", "xyz"]).unwrap();
    assert_eq!(
      args,
      Args {
        get: None,
        indent: 2,
        file: Some("xyz".to_owned())
      }
    );
  }

  #[test]
  fn can_parse_get_arg() {
    let args = Args::try_parse_from(["vdffmt", "--get", "AppState.appid"]).unwrap();
    assert_eq!(
      args,
      Args {
        get: Some("AppState.appid".to_owned()),
        indent: 2,
        file: None
      }
    )
  }

  #[test]
  fn can_parse_indent_arg() {
    let args = Args::try_parse_from(["vdffmt", "--indent", "4", "xyz"]).unwrap();
    assert_eq!(
      args,
      Args {
        get: None,
        indent: 4,
        file: Some("xyz".to_owned())
      }
    )
  }
}

#[cfg(test)]
mod main_tests {
  use crate::{run, Args};
  use clap::Parser;
  use std::{error::Error, fs, io::Write};
  use tempfile::NamedTempFile;

  #[test]
  fn can_format_file_in_place() -> Result<(), Box<dyn Error>> {
    let mut temp = NamedTempFile::new()?;
    temp.write_all(b"a  1   b{c   d}")?;
    temp.flush()?;

    let path = temp.path().to_str().unwrap().to_owned();
    run(Args::try_parse_from(["vdffmt", &path])?)?;
    assert_eq!(
      fs::read_to_string(&path)?,
      "\"a\" \"1\"\n\"b\"\n{\n  \"c\" \"d\"\n}\n".to_owned()
    );
    Ok(())
  }

  #[test]
  fn can_format_with_wider_indent() -> Result<(), Box<dyn Error>> {
    let mut temp = NamedTempFile::new()?;
    temp.write_all(b"b { c d }")?;
    temp.flush()?;

    let path = temp.path().to_str().unwrap().to_owned();
    run(Args::try_parse_from(["vdffmt", "--indent", "4", &path])?)?;
    assert_eq!(
      fs::read_to_string(&path)?,
      "\"b\"\n{\n    \"c\" \"d\"\n}\n".to_owned()
    );
    Ok(())
  }

  #[test]
  fn get_does_not_rewrite_the_file() -> Result<(), Box<dyn Error>> {
    let input = "\"AppState\" { \"appid\" \"252490\" }";
    let mut temp = NamedTempFile::new()?;
    temp.write_all(input.as_bytes())?;
    temp.flush()?;

    let path = temp.path().to_str().unwrap().to_owned();
    run(Args::try_parse_from([
      "vdffmt",
      "--get",
      "AppState.appid",
      &path,
    ])?)?;
    assert_eq!(fs::read_to_string(&path)?, input.to_owned());
    Ok(())
  }
}
