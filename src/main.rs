use std::env;
use std::ffi::OsStr;

use log::{error, info};
use seahorse::{App, Command, Context, Flag};

use working_time::{working_hours, ScheduleDirectory, TicketReport};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::fmt;

    use anyhow::Context as _;
    use log::error;
    use seahorse::Context;

    use working_time::time::DateTime;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    // seahorse actions are plain fn pointers and cannot return errors,
    // so every action wraps its fallible part in this
    pub fn exit_on_error<E: ErrorLike>(result: Result<(), E>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_instant_flag(&self, name: &str) -> Result<DateTime, anyhow::Error> {
            self.required_string_flag(name)?
                .parse::<DateTime>()
                .with_context(|| anyhow::anyhow!("invalid value for flag \"{}\"", name))
        }

        fn optional_instant_flag(&self, name: &str) -> Result<Option<DateTime>, anyhow::Error> {
            match self.context().string_flag(name) {
                Ok(raw) => Ok(Some(raw.parse::<DateTime>().with_context(|| {
                    anyhow::anyhow!("invalid value for flag \"{}\"", name)
                })?)),
                Err(_) => Ok(None),
            }
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

// tickets without a location get one that matches no schedule,
// so the default schedule applies
fn location_flag(context: &Context) -> String {
    context
        .string_flag("location")
        .unwrap_or_else(|_| "default".to_string())
}

fn report_action(context: &Context) -> anyhow::Result<()> {
    let schedules = ScheduleDirectory::builtin();
    let location = location_flag(context);

    let assigned = context.optional_instant_flag("assigned")?;
    let started = context.optional_instant_flag("started")?;
    let finished = context.optional_instant_flag("finished")?;

    info!("computing metrics for \"{}\"", location);
    let report = TicketReport::new(&schedules, location, assigned, started, finished);

    if context.bool_flag("json") {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn hours_action(context: &Context) -> anyhow::Result<()> {
    let schedules = ScheduleDirectory::builtin();
    let location = location_flag(context);

    let from = context.required_instant_flag("from")?;
    let to = context.required_instant_flag("to")?;

    println!("{:.2}", working_hours(&schedules, from, to, &location));

    Ok(())
}

fn locations_action(_context: &Context) -> anyhow::Result<()> {
    let schedules = ScheduleDirectory::builtin();

    for (location, schedule) in schedules.locations() {
        println!(
            "{:<20} {} ({:.2} h/week)",
            location,
            schedule,
            schedule.hours_per_week()
        );
    }

    let default = schedules.default_schedule();
    println!(
        "{:<20} {} ({:.2} h/week)",
        "(default)",
        default,
        default.hours_per_week()
    );

    Ok(())
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let report_command = Command::new("report")
        .usage(format!("{} report [flags]", args[0]))
        .description("Computes the reaction, resolution and total working time of a ticket.")
        .flag(
            Flag::new("location", seahorse::FlagType::String)
                .description("Location whose schedule applies. Default: the default schedule."),
        )
        .flag(
            Flag::new("assigned", seahorse::FlagType::String)
                .description("When the ticket was assigned, e.g. \"2026-01-19 10:30\"."),
        )
        .flag(
            Flag::new("started", seahorse::FlagType::String)
                .description("When work on the ticket started."),
        )
        .flag(
            Flag::new("finished", seahorse::FlagType::String)
                .description("When work on the ticket finished."),
        )
        .flag(Flag::new("json", seahorse::FlagType::Bool).description("Prints the report as JSON."))
        .action(|context| exit_on_error(report_action(context)));

    let hours_command = Command::new("hours")
        .usage(format!("{} hours [flags]", args[0]))
        .description("Computes the working hours between two instants.")
        .flag(
            Flag::new("location", seahorse::FlagType::String)
                .description("Location whose schedule applies. Default: the default schedule."),
        )
        .flag(
            Flag::new("from", seahorse::FlagType::String)
                .description("Start of the span, e.g. \"2026-01-19 10:30\"."),
        )
        .flag(
            Flag::new("to", seahorse::FlagType::String).description("End of the span."),
        )
        .action(|context| exit_on_error(hours_action(context)));

    let locations_command = Command::new("locations")
        .usage(format!("{} locations", args[0]))
        .description("Lists all known locations and their business hours.")
        .action(|context| exit_on_error(locations_action(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [flags]", args[0]))
        .command(report_command)
        .command(hours_command)
        .command(locations_command);

    app.run(args);

    Ok(())
}
