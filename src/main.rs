mod dispatch;
mod expr;
mod operation;

use std::iter::once;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use itertools::Itertools;

use dispatch::Protocol;
use expr::Expr;
use operation::{evaluate, Eval, Render, Trace};

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    env_logger::init();

    let command = App::parse();
    let expr = command.sample().build();
    #[cfg(feature = "debug")]
    println!("{:#?}", expr);

    match command {
        App::Eval { protocol, .. } => {
            let protocols = protocol.map_or_else(|| Protocol::ALL.to_vec(), |p| vec![p]);
            let results: Vec<i64> = protocols
                .iter()
                .map(|protocol| {
                    let value: i64 = protocol.run(&expr, Eval);
                    let rendered: String = protocol.run(&expr, Render);
                    println!(
                        "{:>8}: {} = {}",
                        protocol.to_string(),
                        rendered,
                        value.to_string().blue()
                    );
                    value
                })
                .collect();
            let baseline = evaluate(&expr);
            if !once(&baseline).chain(&results).all_equal() {
                anyhow::bail!(
                    "Protocols disagree on {}: {}",
                    expr,
                    protocols
                        .iter()
                        .zip(&results)
                        .map(|(protocol, value)| format!("{} = {}", protocol, value))
                        .join(", ")
                );
            }
        }
        App::Trace { protocol, .. } => {
            let mut trace = Trace::new(Eval);
            let value: i64 = protocol.run(&expr, &mut trace);
            println!("{}", trace.visits.iter().join(" -> "));
            println!("{} = {}", expr, value.to_string().blue());
        }
    }
    Ok(())
}

#[derive(Parser)]
enum App {
    /// Evaluate a sample tree
    #[clap(alias = "e")]
    Eval {
        #[clap(value_enum, default_value = "sum")]
        sample: Sample,
        /// Run a single protocol instead of comparing all of them
        #[clap(long, short, value_enum)]
        protocol: Option<Protocol>,
    },
    /// Show the order in which handlers are invoked
    #[clap(alias = "t")]
    Trace {
        #[clap(value_enum, default_value = "sum")]
        sample: Sample,
        #[clap(long, short, value_enum, default_value = "internal")]
        protocol: Protocol,
    },
}

impl App {
    fn sample(&self) -> Sample {
        match self {
            App::Eval { sample, .. } | App::Trace { sample, .. } => *sample,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Sample {
    /// 4 + 3 * 5
    Sum,
    /// (1 + 2) * 10
    Product,
    /// 7
    Single,
    /// 1 + (1 + (1 + 1))
    Nested,
}

impl Sample {
    fn build(self) -> Expr {
        match self {
            Sample::Sum => Expr::add(Expr::lit(4), Expr::mul(Expr::lit(3), Expr::lit(5))),
            Sample::Product => Expr::mul(Expr::add(Expr::lit(1), Expr::lit(2)), Expr::lit(10)),
            Sample::Single => Expr::lit(7),
            Sample::Nested => Expr::add(
                Expr::lit(1),
                Expr::add(Expr::lit(1), Expr::add(Expr::lit(1), Expr::lit(1))),
            ),
        }
    }
}
