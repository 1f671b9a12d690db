//! rp2a03 - run a program image on the CPU core and dump the registers.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rp2a03::apu::ApuRegisterFile;
use rp2a03::cartridge::PRG_PAGE_SIZE;
use rp2a03::ppu::PpuRegisterFile;
use rp2a03::{CartridgeImage, CoreConfig, CoreError, System};

#[derive(Parser, Debug)]
#[command(name = "rp2a03")]
#[command(about = "Run a NES program image on the 2A03 CPU core", long_about = None)]
struct Args {
    /// iNES file, or a raw PRG image with --raw
    rom: PathBuf,

    /// Treat the input as a raw PRG image instead of an iNES file
    #[arg(long)]
    raw: bool,

    /// Page size in bytes for raw images
    #[arg(long, default_value_t = PRG_PAGE_SIZE)]
    page_size: usize,

    /// Number of instructions to execute
    #[arg(short = 'n', long, default_value_t = 1000)]
    steps: usize,

    /// Start here instead of at the reset vector (hex, e.g. C000)
    #[arg(short, long, value_parser = parse_hex_u16)]
    entry: Option<u16>,

    /// Bank mapped at $8000 after power-on
    #[arg(short, long, default_value_t = 0)]
    bank: u16,

    /// Dump the first page of RAM after execution
    #[arg(long)]
    dump_zero_page: bool,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let digits = s
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('$');
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid address {s:?}: {e}"))
}

fn load_image(args: &Args) -> Result<CartridgeImage, String> {
    let data = fs::read(&args.rom)
        .map_err(|e| format!("failed to read {}: {}", args.rom.display(), e))?;
    let image = if args.raw {
        CartridgeImage::new(data, args.page_size)
    } else {
        CartridgeImage::from_ines_bytes(&data)
    };
    image.map_err(|e| format!("failed to load image: {e}"))
}

fn run(args: &Args) -> Result<(), String> {
    let cart = load_image(args)?;
    println!(
        "Loaded {} bytes of PRG ({} pages of {:#X} bytes)",
        cart.len(),
        cart.bank_count(),
        cart.page_size()
    );

    let mut config = CoreConfig::default()
        .with_page_size(cart.page_size())
        .with_initial_bank(args.bank);
    if let Some(pc) = args.entry {
        config = config.with_entry_point(pc);
    }

    let mut ppu = PpuRegisterFile::new();
    let mut apu = ApuRegisterFile::new();
    let mut system = System::power_on(config, &cart, &mut ppu, &mut apu)
        .map_err(|e| format!("power on failed: {e}"))?;

    let mut executed = 0usize;
    let mut halted: Option<CoreError> = None;
    while executed < args.steps {
        match system.step() {
            Ok(_) => executed += 1,
            Err(e) => {
                halted = Some(e);
                break;
            }
        }
    }

    println!("Executed {} instructions", executed);
    if let Some(e) = &halted {
        println!("Stopped: {e}");
    }
    dump_cpu_state(&system);

    if args.dump_zero_page {
        dump_zero_page(&mut system);
    }
    Ok(())
}

fn dump_cpu_state(system: &System<'_>) {
    let cpu = system.cpu();
    println!("\nCPU State:");
    println!("  A:  {:#04X}", cpu.a());
    println!("  X:  {:#04X}", cpu.x());
    println!("  Y:  {:#04X}", cpu.y());
    println!("  SP: {:#04X}", cpu.sp());
    println!("  PC: {:#06X}", cpu.pc());
    println!("  P:  {:#010b}", cpu.status());
    println!("  Cycles: {}", system.bus().total_cycles());
}

fn dump_zero_page(system: &mut System<'_>) {
    println!("\nZero page:");
    for row in 0..16u16 {
        let bytes: Vec<String> = (0..16u16)
            .map(|col| format!("{:02X}", system.read_bus(row * 16 + col)))
            .collect();
        println!("  {:04X}: {}", row * 16, bytes.join(" "));
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
