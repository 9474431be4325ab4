use clap::Parser;
use guest_maths::config::LogFormat;
use guest_maths::utils::error::ErrorSeverity;
use guest_maths::utils::{logger, validation::Validate};
use guest_maths::{
    parse_operand, Calculator, CliConfig, GuestConfig, Host, Invocation, Logger, MathsError,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match GuestConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => GuestConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let level = config.log_level()?;
    match config.logging.format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, level),
        LogFormat::Json => logger::init_json_logger(cli.verbose, level),
    }

    tracing::debug!("Guest config: {:?}", config);
    tracing::debug!(
        "Hosting component '{}' ({} guest, {} operands)",
        config.component.name,
        config.component.language,
        config.component.numeric
    );

    let sink = match config.build_logger() {
        Ok(sink) => sink,
        Err(e) => exit_with(&e),
    };
    let calculator = Calculator::new(sink, config.component.language.clone());
    let host = Host::new(calculator, config.component.numeric);

    let outcome = match cli.command.operation() {
        Some((op, args)) => invoke_once(&host, op, &args.a, &args.b),
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            host.serve(stdin, tokio::io::stdout()).await.map(|handled| {
                tracing::info!("Served {} invocations", handled);
            })
        }
    };

    if let Err(e) = outcome {
        exit_with(&e);
    }

    Ok(())
}

fn invoke_once<L: Logger>(
    host: &Host<L>,
    op: guest_maths::Operation,
    a: &str,
    b: &str,
) -> guest_maths::Result<()> {
    let invocation = Invocation {
        op,
        a: parse_operand(host.numeric(), a)?,
        b: parse_operand(host.numeric(), b)?,
    };
    let result = host.invoke(&invocation)?;
    println!("{}", result);
    Ok(())
}

fn exit_with(e: &MathsError) -> ! {
    tracing::error!(
        "❌ Invocation failed: {} (Kind: {}, Severity: {:?})",
        e,
        e.kind(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
