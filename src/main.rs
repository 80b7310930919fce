//! Command-line front end to the MAC datapath model: feed it bit patterns in hex, get the bit
//! patterns the hardware would produce.
//!
//! With no subcommand it widens the e4m3 `0x40` (2.0) into fp16, as a smoke test.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;
use npu_softfloat::{Anchor, Float, e4m3, fp16, bf16, fp32};

#[derive(Parser, Debug)]
#[command(author, version, about = "Bit-exact model of an NPU multiply-accumulate datapath", long_about = None)]
struct Args {
  #[command(subcommand)]
  command: Option<Command>,

  /// Log every pipeline stage.
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Widen an e4m3 bit pattern into a wider format.
  Widen {
    /// e4m3 bits, in hex (e.g. 0x40).
    value: String,

    #[arg(long, value_enum, default_value_t = Target::Fp16)]
    to: Target,
  },

  /// Multiply two fp16 bit patterns.
  Mul {
    /// fp16 bits, in hex.
    a: String,
    /// fp16 bits, in hex.
    b: String,
  },

  /// Dot product of two fp16 vectors plus an e4m3 addend, into a bf16.
  Mac {
    /// fp16 bits, in hex, comma separated.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    a: Vec<String>,

    /// fp16 bits, in hex, comma separated. Must be as long as `a`.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    b: Vec<String>,

    /// e4m3 bits, in hex.
    #[arg(long, default_value = "0x00")]
    addend: String,
  },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Target {
  Fp16,
  Bf16,
  Fp32,
}

/// Parse a hex bit pattern (with or without `0x`) for a format with `EXP` and `MANT` bits.
fn parse<const EXP: u32, const MANT: u32, const FINITE: bool>(text: &str) -> Result<Float<EXP, MANT, FINITE>> {
  let digits = text.trim().trim_start_matches("0x").trim_start_matches("0X");
  let bits = u32::from_str_radix(digits, 16)
    .with_context(|| format!("`{text}` is not a hex bit pattern"))?;
  let width = 1 + EXP + MANT;
  if bits >> width != 0 {
    bail!("`{text}` does not fit in {width} bits");
  }
  Ok(Float::from_bits(bits))
}

/// Print a result the way every subcommand does: hex bits, then the value.
fn show<const EXP: u32, const MANT: u32, const FINITE: bool>(x: Float<EXP, MANT, FINITE>) {
  let digits = (1 + EXP + MANT).div_ceil(4) as usize;
  println!("{:#0w$x} ({x})", x.to_bits(), w = digits + 2);
}

fn widen(value: &str, to: Target) -> Result<()> {
  let x: e4m3 = parse(value)?;
  debug!("input {x:?} = {x}");
  match to {
    Target::Fp16 => show(fp16::from(x)),
    Target::Bf16 => show(bf16::from(x)),
    Target::Fp32 => show(fp32::from(x)),
  }
  Ok(())
}

fn mul(a: &str, b: &str) -> Result<()> {
  let a: fp16 = parse(a)?;
  let b: fp16 = parse(b)?;
  debug!("operands {a:?} = {a}, {b:?} = {b}");
  show(a * b);
  Ok(())
}

fn mac(a: &[String], b: &[String], addend: &str) -> Result<()> {
  if a.len() != b.len() {
    bail!("vectors have different lengths ({} and {})", a.len(), b.len());
  }
  let a = a.iter().map(|x| parse::<5, 10, false>(x)).collect::<Result<Vec<fp16>>>()?;
  let b = b.iter().map(|x| parse::<5, 10, false>(x)).collect::<Result<Vec<fp16>>>()?;
  let addend: e4m3 = parse(addend)?;

  let products: Vec<fp16> = a.iter().zip(&b).map(|(&a, &b)| a * b).collect();
  debug!("products: {:?}", products.iter().map(|p| p.to_string()).collect::<Vec<_>>());
  if log::log_enabled!(log::Level::Debug) && products.iter().all(|p| p.is_finite()) {
    let anchor = Anchor::select(&products, addend);
    let aligned: Vec<i32> = products.iter().map(|&p| p.align(anchor)).collect();
    let sum = npu_softfloat::reduce(&aligned, addend.align(anchor));
    debug!("anchor: {} (exponent {})", anchor.to_bits(), anchor.exp());
    debug!("aligned: {aligned:?}, addend {}", addend.align(anchor));
    debug!("sum: {sum:#010x}");
  }

  show(npu_softfloat::mac(&products, addend));
  Ok(())
}

fn main() -> Result<()> {
  let args = Args::parse();

  let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
  env_logger::builder().filter_level(log_level).parse_default_env().init();

  match args.command {
    None => widen("0x40", Target::Fp16),
    Some(Command::Widen { value, to }) => widen(&value, to),
    Some(Command::Mul { a, b }) => mul(&a, &b),
    Some(Command::Mac { a, b, addend }) => mac(&a, &b, &addend),
  }
}
