// Copyright (c) 2025 Moni Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("moni")
        .about("Three-bucket personal budgeting, savings goals, and FNPF projections")
        .version(crate_version!())
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("tx")
                .about("Manage ledger transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(Arg::new("kind").long("kind").required(true).help("income|expense"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("account").long("account").required(true).help(
                            "anz|baroda|bsp|bred|hfc|westpac|mpaisa|cash|other",
                        ))
                        .arg(Arg::new("category").long("category").help(
                            "needs|wants|responsibilities|none (expenses only)",
                        ))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(Arg::new("desc").long("desc").help("Description"))
                        .arg(Arg::new("doc").long("doc").help("Supporting document URL")),
                )
                .subcommand(
                    Command::new("transfer")
                        .about("Move value between two accounts")
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                        .arg(Arg::new("desc").long("desc").help("Description")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .arg(Arg::new("account").long("account"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Budget split and monthly status")
                .subcommand(
                    Command::new("set")
                        .about("Save the bucket percentages (must sum to 100)")
                        .arg(Arg::new("needs").long("needs").required(true))
                        .arg(Arg::new("wants").long("wants").required(true))
                        .arg(
                            Arg::new("responsibilities")
                                .long("responsibilities")
                                .required(true),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("status")
                        .about("Per-bucket budget, spend, and utilization for a month")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, default current")),
                )),
        )
        .subcommand(
            Command::new("salary")
                .about("Fixed monthly salary override for the budget basis")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(Command::new("clear"))
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true)),
                )
                .subcommand(
                    Command::new("contribute")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(
                            Arg::new("completed")
                                .long("completed")
                                .action(ArgAction::SetTrue)
                                .help("Only completed goals"),
                        )
                        .arg(
                            Arg::new("active")
                                .long("active")
                                .action(ArgAction::SetTrue)
                                .help("Only active goals"),
                        ),
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("fnpf")
                .about("FNPF contribution configuration and projection")
                .subcommand(
                    Command::new("set")
                        .about("Persist contribution percentages")
                        .arg(Arg::new("employee").long("employee").help("Employee rate, 0-100"))
                        .arg(Arg::new("personal").long("personal").help(
                            "Voluntary personal rate, 0-100",
                        )),
                )
                .subcommand(json_flags(Command::new("show").about("Effective configuration")))
                .subcommand(json_flags(
                    Command::new("project")
                        .about("Project monthly and annual contributions")
                        .arg(Arg::new("salary").long("salary").help(
                            "Gross monthly salary, default: configured salary",
                        )),
                )),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Full derived snapshot for a month")
                .arg(Arg::new("month").long("month").help("YYYY-MM, default current")),
        ))
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for inconsistencies"))
}
