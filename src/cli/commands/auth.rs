use clap::{Arg, Command};

pub const ARG_BCRYPT_COST: &str = "bcrypt-cost";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_BCRYPT_COST)
            .long(ARG_BCRYPT_COST)
            .help("bcrypt work factor used when hashing new passwords")
            .env("AUTHGATE_BCRYPT_COST")
            // bcrypt::DEFAULT_COST
            .default_value("12")
            .value_parser(clap::value_parser!(u32).range(4..=31)),
    )
}
