//! Calculator subcommands.

use crate::config::CalcConfig;
use anyhow::{anyhow, Result};
use bomm_lock::{available_lock_periods, compute_new_unlock_time, AvailablePeriods};
use bomm_power::unstaking::ICON_BLOCK_INTERVAL_SECS;
use bomm_power::{
    average_unstaking_time, boosted_balance, new_boosted_balance, omm_voting_power, slope,
    user_voting_power, voting_power,
};
use bomm_types::time::MICROS_PER_SECOND;
use bomm_types::{hex_to_decimal, Decimal, LockDuration, Timestamp};
use bomm_utils::{format_vote_duration, NumberFormat};
use clap::Subcommand;
use serde_json::json;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Unlock time produced by locking or extending for a named duration.
    UnlockTime {
        /// Amount being locked.
        #[arg(long, default_value = "0")]
        amount: Decimal,
        /// Lock duration: 1w, 1m, 3m, 6m, 1y, 2y or 4y.
        #[arg(long)]
        duration: LockDuration,
        /// Unlock time of the existing lock (0 when there is none).
        #[arg(long, default_value = "0")]
        current_unlock: Decimal,
    },

    /// Current bOMM of a lock.
    BoostedBalance {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        unlock: Decimal,
    },

    /// bOMM right after locking for a named duration.
    NewBoostedBalance {
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        duration: LockDuration,
        #[arg(long, default_value = "0")]
        current_unlock: Decimal,
    },

    /// Lock durations still selectable for a lock ending at `current_unlock`.
    LockPeriods {
        #[arg(long, default_value = "0")]
        current_unlock: Decimal,
    },

    /// A user's share of the protocol voting power, with an optional preview.
    UserVotingPower {
        #[arg(long)]
        omm_voting_power: Decimal,
        #[arg(long)]
        total_supply: Decimal,
        #[arg(long)]
        recorded: Decimal,
        /// Working balance after the pending action (defaults to recorded).
        #[arg(long)]
        previewed: Option<Decimal>,
    },

    /// Voting power per unit of working balance.
    VotingPower {
        #[arg(long)]
        omm_voting_power: Decimal,
        #[arg(long)]
        recorded: Decimal,
        #[arg(long)]
        total_supply: Decimal,
        #[arg(long)]
        new_balance: Option<Decimal>,
    },

    /// Protocol voting power from sICX liquidity.
    OmmVotingPower {
        #[arg(long)]
        liquidity: Decimal,
        #[arg(long)]
        ratio: Decimal,
    },

    /// Format a vote duration given in microseconds.
    FormatDuration {
        micros: Option<Decimal>,
    },

    /// Average unstaking wait from `REQUEST:CLAIMABLE` block heights.
    UnstakingTime {
        /// Block heights as read from chain logs, hex (`0x3e8`) or decimal.
        #[arg(long = "sample", value_name = "REQUEST:CLAIMABLE")]
        samples: Vec<String>,
        /// Seconds per block.
        #[arg(long, default_value_t = Decimal::from(ICON_BLOCK_INTERVAL_SECS))]
        block_interval: Decimal,
    },

    /// Print the effective configuration as TOML.
    Config,
}

fn parse_block(raw: &str) -> Result<Decimal> {
    let raw = raw.trim();
    if raw.starts_with("0x") || raw.starts_with("0X") {
        Ok(hex_to_decimal(raw)?)
    } else {
        raw.parse::<Decimal>()
            .map_err(|e| anyhow!("invalid block height {raw:?}: {e}"))
    }
}

fn parse_sample(raw: &str) -> Result<(Decimal, Decimal)> {
    let (request, claimable) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("expected REQUEST:CLAIMABLE, got {raw:?}"))?;
    Ok((parse_block(request)?, parse_block(claimable)?))
}

/// Output of a command in both renderings.
#[derive(Debug)]
pub struct Report {
    pub human: String,
    pub json: serde_json::Value,
}

impl Report {
    fn new(human: impl Into<String>, json: serde_json::Value) -> Self {
        Self {
            human: human.into(),
            json,
        }
    }
}

/// Run `command` with a single `now` sampled by the caller.
pub fn run(command: &Command, config: &CalcConfig, now: Timestamp) -> Result<Report> {
    let amount_format = NumberFormat::asset(&config.token);
    let timestamp = |raw: Decimal| config.time_unit.timestamp(raw);

    let report = match command {
        Command::UnlockTime {
            amount,
            duration,
            current_unlock,
        } => {
            let unlock =
                compute_new_unlock_time(*amount, duration.as_millis(), timestamp(*current_unlock)?, now)?;
            Report::new(
                format!("unlock time: {}", unlock.as_millis()),
                json!({ "unlock_time_ms": unlock.as_millis() }),
            )
        }
        Command::BoostedBalance { amount, unlock } => {
            let value = boosted_balance(slope(*amount)?, timestamp(*unlock)?, now)?;
            Report::new(
                format!("bOMM: {}", amount_format.format(value)),
                json!({ "boosted_balance": value }),
            )
        }
        Command::NewBoostedBalance {
            amount,
            duration,
            current_unlock,
        } => {
            let value =
                new_boosted_balance(*amount, duration.as_millis(), timestamp(*current_unlock)?, now)?;
            Report::new(
                format!("new bOMM: {}", amount_format.format(value)),
                json!({ "boosted_balance": value }),
            )
        }
        Command::LockPeriods { current_unlock } => {
            match available_lock_periods(timestamp(*current_unlock)?, now) {
                AvailablePeriods::Options(options) => {
                    let labels: Vec<&str> = options.iter().map(|d| d.label()).collect();
                    Report::new(labels.join(", "), json!({ "options": options }))
                }
                AvailablePeriods::NoOptions => Report::new(
                    "no lock periods available",
                    json!({ "options": serde_json::Value::Null }),
                ),
            }
        }
        Command::UserVotingPower {
            omm_voting_power,
            total_supply,
            recorded,
            previewed,
        } => {
            let power = user_voting_power(
                *omm_voting_power,
                *total_supply,
                *recorded,
                previewed.unwrap_or(*recorded),
            )?;
            Report::new(
                format!("voting power: {}", NumberFormat::us_locale().format(power)),
                json!({ "voting_power": power }),
            )
        }
        Command::VotingPower {
            omm_voting_power,
            recorded,
            total_supply,
            new_balance,
        } => {
            let power = voting_power(*omm_voting_power, *recorded, *total_supply, *new_balance)?;
            Report::new(
                format!("voting power per bOMM: {}", NumberFormat::us_locale().format(power)),
                json!({ "voting_power": power }),
            )
        }
        Command::OmmVotingPower { liquidity, ratio } => {
            let power = omm_voting_power(*liquidity, *ratio)?;
            Report::new(
                format!("OMM voting power: {}", NumberFormat::us_locale().format(power)),
                json!({ "omm_voting_power": power }),
            )
        }
        Command::FormatDuration { micros } => {
            let text = format_vote_duration(*micros);
            Report::new(text.clone(), json!({ "duration": text }))
        }
        Command::UnstakingTime {
            samples,
            block_interval,
        } => {
            let samples = samples
                .iter()
                .map(|raw| parse_sample(raw))
                .collect::<Result<Vec<_>>>()?;
            let secs = average_unstaking_time(&samples, *block_interval)?;
            let micros = secs * Decimal::from(MICROS_PER_SECOND);
            Report::new(
                format!("average unstaking time: {}", format_vote_duration(Some(micros))),
                json!({ "average_unstaking_secs": secs }),
            )
        }
        Command::Config => Report::new(config.to_toml_string()?, serde_json::to_value(config)?),
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bomm_types::time::WEEK_IN_MILLISECONDS;
    use std::str::FromStr;

    const NOW: u64 = 1_700_000_000_000;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn run_default(command: Command) -> Report {
        run(&command, &CalcConfig::default(), Timestamp::new(NOW)).unwrap()
    }

    #[test]
    fn unlock_time_is_week_aligned() {
        let report = run_default(Command::UnlockTime {
            amount: d("100"),
            duration: LockDuration::OneMonth,
            current_unlock: Decimal::ZERO,
        });
        let expected = (NOW + LockDuration::OneMonth.as_millis_u64()) / WEEK_IN_MILLISECONDS
            * WEEK_IN_MILLISECONDS;
        assert_eq!(report.human, format!("unlock time: {expected}"));
    }

    #[test]
    fn boosted_balance_is_labelled_with_token() {
        let unlock = NOW + LockDuration::OneYear.as_millis_u64();
        let report = run_default(Command::BoostedBalance {
            amount: d("1000"),
            unlock: Decimal::from(unlock),
        });
        assert_eq!(report.human, "bOMM: 250.00 bOMM");
    }

    #[test]
    fn lock_periods_reports_sentinel() {
        let unlock = NOW + LockDuration::MAX.as_millis_u64();
        let report = run_default(Command::LockPeriods {
            current_unlock: Decimal::from(unlock),
        });
        assert_eq!(report.human, "no lock periods available");
        assert_eq!(report.json["options"], serde_json::Value::Null);
    }

    #[test]
    fn lock_periods_lists_labels() {
        let unlock = NOW + 300 * 86_400_000;
        let report = run_default(Command::LockPeriods {
            current_unlock: Decimal::from(unlock),
        });
        assert_eq!(report.human, "1 year, 2 years, 4 years");
    }

    #[test]
    fn user_voting_power_defaults_preview_to_recorded() {
        let report = run_default(Command::UserVotingPower {
            omm_voting_power: d("500"),
            total_supply: d("1000"),
            recorded: d("50"),
            previewed: None,
        });
        assert_eq!(report.human, "voting power: 25.00");
    }

    #[test]
    fn omm_voting_power_json() {
        let report = run_default(Command::OmmVotingPower {
            liquidity: d("1000"),
            ratio: d("2.5"),
        });
        assert_eq!(report.json["omm_voting_power"], "2500.00");
    }

    #[test]
    fn format_duration_passes_through() {
        let report = run_default(Command::FormatDuration {
            micros: Some(Decimal::from(7_200_000_000u64)),
        });
        assert_eq!(report.human, "2 hours");
    }

    #[test]
    fn unstaking_time_decodes_hex_heights() {
        let report = run_default(Command::UnstakingTime {
            samples: vec!["0x3e8:0x7d0".into(), "1000:4600".into()],
            block_interval: Decimal::from(ICON_BLOCK_INTERVAL_SECS),
        });
        // mean wait of 2300 blocks at 2s each
        assert_eq!(report.json["average_unstaking_secs"], "4600");
        assert_eq!(report.human, "average unstaking time: 1 hour");
    }

    #[test]
    fn unstaking_time_rejects_malformed_samples() {
        for sample in ["0x3e8", "0x+3e8:0x7d0", "10:5"] {
            let result = run(
                &Command::UnstakingTime {
                    samples: vec![sample.into()],
                    block_interval: Decimal::from(ICON_BLOCK_INTERVAL_SECS),
                },
                &CalcConfig::default(),
                Timestamp::new(NOW),
            );
            assert!(result.is_err(), "{sample} accepted");
        }
    }

    #[test]
    fn config_prints_effective_toml() {
        let report = run_default(Command::Config);
        assert!(report.human.contains("log_level = \"warn\""));
        assert_eq!(report.json["token"]["symbol"], "bOMM");
    }

    #[test]
    fn invalid_input_surfaces_as_error() {
        let result = run(
            &Command::OmmVotingPower {
                liquidity: d("-1"),
                ratio: d("2"),
            },
            &CalcConfig::default(),
            Timestamp::new(NOW),
        );
        assert!(result.is_err());
    }
}
