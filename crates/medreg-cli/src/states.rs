//! # `medreg states`
//!
//! Prints the hand-curated state licensing rule table, whole or for one
//! state.

use anyhow::bail;
use clap::Args;

use medreg_licensing::{state_rule, StateLicensingRule, STATE_RULES};

/// Arguments for `medreg states`.
#[derive(Args, Debug)]
pub struct StatesArgs {
    /// Show only this two-letter state code.
    #[arg(long)]
    pub state: Option<String>,

    /// Emit the rules as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Print the rule table.
pub fn run(args: StatesArgs) -> anyhow::Result<()> {
    let rules: Vec<&StateLicensingRule> = match &args.state {
        Some(code) => match state_rule(code) {
            Some(rule) => vec![rule],
            None => bail!("unsupported state code: {code}"),
        },
        None => STATE_RULES.iter().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    for rule in rules {
        println!("{} ({})", rule.state, rule.code);
        println!("  Board:    {}", rule.board);
        println!("  Renewal:  {} / {}", rule.renewal_period, rule.renewal_month);
        println!("  CME:      {}", rule.cme_requirements);
        println!("  Website:  {}", rule.website);
        println!("  Notes:    {}", rule.notes);
        println!();
    }
    Ok(())
}
