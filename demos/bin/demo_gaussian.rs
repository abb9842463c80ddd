//! Gaussian State Preparation Demo
//!
//! Synthesizes the recursive rotation circuit for a discretized Gaussian
//! wavefunction, executes it on the dense statevector simulator, and prints
//! the resulting probability distribution.

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use gausskit_demos::{
    print_header, print_info, print_result, print_section, print_success, probability_bar,
};
use gausskit_sim::{MAX_QUBITS, Statevector};
use gausskit_synth::{DomainPolicy, GaussianState, basis_index, basis_value};

#[derive(Parser, Debug)]
#[command(name = "demo-gaussian")]
#[command(about = "Prepare a discretized Gaussian state on a qubit register")]
struct Args {
    /// Center of the Gaussian in grid units
    #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
    mean: f64,

    /// Variance parameter of the Gaussian in grid units
    #[arg(long, default_value = "1.0")]
    var: f64,

    /// Number of qubits (grid size = 2^n)
    #[arg(short = 'n', long, default_value = "3")]
    qubits: u32,

    /// Working precision for the theta series, in bits
    #[arg(long, default_value = "128")]
    precision: u32,

    /// Fail on branch angles outside [0, 1] instead of clamping
    #[arg(long)]
    strict: bool,

    /// Show the synthesized circuit
    #[arg(long)]
    show_circuit: bool,

    /// List the circuit in flattened form (implies --show-circuit)
    #[arg(long)]
    flat: bool,

    /// Number of measurement shots to sample (0 = skip sampling)
    #[arg(long, default_value = "0")]
    shots: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    print_header("Gaussian State Preparation Demo");

    if args.qubits == 0 || args.qubits as usize > MAX_QUBITS {
        anyhow::bail!("qubit count must be between 1 and {MAX_QUBITS}");
    }
    let n = args.qubits;
    let points = 1u64 << n;

    print_section("Problem Setup");
    print_result("Mean", args.mean);
    print_result("Variance parameter", args.var);
    print_result("Qubits", n);
    print_result("Grid points", points);
    print_result("Precision", format!("{} bits", args.precision));
    print_result(
        "Domain policy",
        if args.strict { "strict" } else { "clamp" },
    );

    print_section("Circuit Synthesis");
    let policy = if args.strict {
        DomainPolicy::Strict
    } else {
        DomainPolicy::Clamp
    };
    let circuit = GaussianState::new(args.mean, args.var, n)
        .with_precision(args.precision)
        .with_policy(policy)
        .circuit()
        .context("circuit synthesis failed")?;

    print_result("Circuit", circuit.name());
    print_result("Rotations", circuit.rotation_count());
    print_result("X gates", circuit.gate_count("x"));
    print_result("Primitive gates", circuit.primitive_count());

    if args.show_circuit || args.flat {
        print_section("Synthesized Circuit");
        if args.flat {
            println!("{}", circuit.flatten());
        } else {
            println!("{circuit}");
        }
    }

    print_section("Statevector Execution");
    let state = Statevector::from_circuit(&circuit).context("simulation failed")?;
    print_result("Amplitudes", state.amplitudes().len());
    print_result("Norm", format!("{:.12}", state.total_probability()));

    print_section("Probability Distribution");
    let display_limit = 64;
    if points <= display_limit {
        for value in 0..points {
            let p = state.probability(basis_index(value, n));
            print_distribution_row(value, p, n);
        }
    } else {
        print_info(&format!(
            "register has {points} grid points; showing the {display_limit} most probable"
        ));
        let mut ranked: Vec<(u64, f64)> = (0..points)
            .map(|value| (value, state.probability(basis_index(value, n))))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(display_limit as usize);
        for (value, p) in ranked {
            print_distribution_row(value, p, n);
        }
    }

    if args.shots > 0 {
        print_section("Measurement Sampling");
        let mut rng = rand::thread_rng();
        let mut counts = vec![0u64; points as usize];
        for _ in 0..args.shots {
            counts[state.sample(&mut rng)] += 1;
        }
        let mut ranked: Vec<(usize, u64)> = counts
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        print_result("Shots", args.shots);
        for (slot, count) in ranked.iter().take(8) {
            let value = basis_value(*slot, n);
            print_result(
                &format!("|{value}⟩"),
                format!(
                    "{count} hits ({:.1}%)",
                    100.0 * *count as f64 / args.shots as f64
                ),
            );
        }
    }

    print_section("Demo Narrative");
    println!(
        "  This demo loads {points} grid points with amplitudes following a"
    );
    println!(
        "  Gaussian centered at {} with variance parameter {}, wrapped",
        args.mean, args.var
    );
    println!("  periodically onto the register.");
    println!();
    println!("  The synthesis:");
    println!("  1. Evaluates two Jacobi theta values in multiple precision");
    println!("  2. Rotates the last wire by twice the derived branch angle");
    println!("  3. Recurses on the remaining wires with rescaled parameters,");
    println!("     once under each setting of the rotated wire");

    print_section("Expected Results");
    let peak = args.mean.round().rem_euclid(points as f64) as u64;
    print_result("Most probable value", format!("|{peak}⟩"));
    print_result(
        "Peak probability",
        format!("{:.6}", state.probability(basis_index(peak, n))),
    );

    println!();
    print_success("Gaussian preparation demo complete!");
    println!();
    print_info("Grid values are read out in natural order:");
    println!("  wire n-1 holds the least significant bit of the value, so");
    println!("  statevector slots are visited through a bit reversal.");

    Ok(())
}

/// Print one row of the probability table: value, bit pattern, probability, bar.
fn print_distribution_row(value: u64, probability: f64, n_qubits: u32) {
    println!(
        "  |{value:>3}⟩ = |{value:0width$b}⟩  {probability:>11.8}  {}",
        style(probability_bar(probability, 32)).cyan(),
        width = n_qubits as usize,
    );
}
