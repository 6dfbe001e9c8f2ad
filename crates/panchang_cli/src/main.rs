use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use panchang_config::PanchangConfig;
use panchang_engine::{
    GeoLocation, PanchangEngine, PanchangInfo, PanchangReport, resolve_timezone_name,
    respond_json, validate_tz_hours,
};
use panchang_ephem::{CelestialLongitudeProvider, sun_moon_longitudes};
use panchang_time::{CalendarDate, jd_to_centuries, weekday_index};
use panchang_vedic::{
    deg_to_dms, nakshatra_from_longitude, rashi_from_longitude, tithi_from_elongation,
    vaar_from_jdn, yoga_from_sum,
};

#[derive(Parser)]
#[command(name = "panchang", about = "Daily Hindu panchang calculator")]
struct Cli {
    /// Config file (JSON). Falls back to $PANCHANG_CONFIG, then defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a JSON request on stdin, write the JSON response on stdout
    Stdin,
    /// Panchang for one date
    Report {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// UTC offset in hours, or a name such as IST or UTC
        #[arg(long, default_value = "5.5", allow_negative_numbers = true)]
        tz: String,
        /// Print the JSON response instead of text
        #[arg(long)]
        json: bool,
    },
    /// Panchang for consecutive dates
    Calendar {
        /// First date (YYYY-MM-DD)
        start: String,
        /// Number of days (1-366)
        #[arg(long, default_value = "30")]
        days: u32,
        /// Latitude in degrees, north positive
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// UTC offset in hours, or a name such as IST or UTC
        #[arg(long, default_value = "5.5", allow_negative_numbers = true)]
        tz: String,
        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Julian Day Number of a date
    Jd {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Sun and Moon longitudes at a date's Julian Day Number
    Longitudes {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Rashi from ecliptic longitude
    Rashi {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from the Moon's longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Tithi from Moon-Sun elongation
    TithiFromElongation {
        /// Elongation in degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Yoga from the Sun + Moon longitude sum
    YogaFromSum {
        /// Sum of longitudes in degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

fn parse_date(s: &str) -> CalendarDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_tz(s: &str) -> f64 {
    resolve_timezone_name(s)
        .and_then(validate_tz_hours)
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        })
}

fn parse_location(lat: f64, lon: f64) -> GeoLocation {
    GeoLocation::checked(lat, lon).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn load_engine(path: Option<&PathBuf>) -> PanchangEngine {
    log::debug!("config path from command line: {path:?}");
    let config = PanchangConfig::resolve(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    });
    PanchangEngine::from_config(&config).unwrap_or_else(|e| {
        eprintln!("Failed to build engine: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize: {e}");
            std::process::exit(1);
        }
    }
}

fn print_info(info: &PanchangInfo) {
    let c = &info.classification;
    println!("Date:       {} ({})", info.date, info.vaar.english_name());
    println!(
        "Tithi:      {} {} ({} of 15, index {})",
        c.tithi.paksha.name(),
        info.tithi_name(),
        c.tithi.tithi_in_paksha,
        c.tithi.tithi_index
    );
    println!(
        "Nakshatra:  {} pada {}",
        c.nakshatra.nakshatra.name(),
        c.nakshatra.pada
    );
    println!("Yoga:       {} ({})", c.yoga.yoga.name(), c.yoga.effect.label());
    println!("Karana:     {}", c.karana.karana.name());
    println!("Nadi:       {}", c.nadi.name());
    println!(
        "Sun:        {:.4} deg in {}",
        c.sun_longitude,
        info.sun_rashi_name()
    );
    println!(
        "Moon:       {:.4} deg in {}",
        c.moon_longitude,
        info.moon_rashi_name()
    );
    println!("Sunrise:    {}", info.sunrise);

    let reading = info.interpretation();
    println!();
    println!("{}", reading.summary);
    for line in &reading.details {
        println!("  {line}");
    }
    let observances: Vec<&str> = info.observances().iter().map(|o| o.name()).collect();
    if !observances.is_empty() {
        println!("Observances: {}", observances.join(", "));
    }
    println!("{}", reading.recommendation);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config_path = cli.config.as_ref();

    match cli.command {
        Commands::Stdin => {
            let mut input = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut input) {
                eprintln!("Failed to read stdin: {e}");
                std::process::exit(1);
            }
            let engine = load_engine(config_path);
            println!("{}", respond_json(&input, &engine).to_json());
        }

        Commands::Report {
            date,
            lat,
            lon,
            tz,
            json,
        } => {
            let date = parse_date(&date);
            let location = parse_location(lat, lon);
            let tz_hours = parse_tz(&tz);
            let engine = load_engine(config_path);
            let info = engine
                .for_date(date, &location, tz_hours)
                .unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                });
            if json {
                print_json(&PanchangReport::from(&info));
            } else {
                print_info(&info);
            }
        }

        Commands::Calendar {
            start,
            days,
            lat,
            lon,
            tz,
            json,
        } => {
            let start = parse_date(&start);
            let location = parse_location(lat, lon);
            let tz_hours = parse_tz(&tz);
            let engine = load_engine(config_path);
            let infos = engine
                .for_range(start, days, &location, tz_hours)
                .unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                });
            if json {
                let reports: Vec<PanchangReport> = infos.iter().map(PanchangReport::from).collect();
                print_json(&reports);
            } else {
                for info in &infos {
                    let c = &info.classification;
                    println!(
                        "{}  {:<10} {:<8} {:<12} {:<17} {:<11} {}",
                        info.date,
                        info.vaar.english_name(),
                        c.tithi.paksha.name(),
                        info.tithi_name(),
                        c.nakshatra.nakshatra.name(),
                        c.yoga.yoga.name(),
                        info.sunrise
                    );
                }
            }
        }

        Commands::Jd { date } => {
            let date = parse_date(&date);
            let jdn = date.jdn();
            println!("JDN:        {jdn}");
            println!("Centuries:  {:.10}", jd_to_centuries(jdn as f64));
            println!(
                "Weekday:    {} ({})",
                weekday_index(jdn),
                vaar_from_jdn(jdn).english_name()
            );
        }

        Commands::Longitudes { date } => {
            let date = parse_date(&date);
            let engine = load_engine(config_path);
            let jd = date.jdn() as f64;
            let (sun, moon) = sun_moon_longitudes(engine.longitudes(), jd).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            println!("Backend:    {}", engine.longitudes().name());
            println!("JD:         {jd:.1}");
            println!("Sun:        {sun:.6} deg");
            println!("Moon:       {moon:.6} deg");
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Commands::TithiFromElongation { deg } => {
            let info = tithi_from_elongation(deg);
            println!(
                "{} {} (index {}, {:.4} deg in tithi)",
                info.paksha.name(),
                info.name(Default::default()),
                info.tithi_index,
                info.degrees_in_tithi
            );
        }

        Commands::YogaFromSum { deg } => {
            let info = yoga_from_sum(deg);
            println!(
                "{} (index {}) - {}",
                info.yoga.name(),
                info.yoga_index,
                info.effect.label()
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {:.2} sec", d.degrees, d.minutes, d.seconds);
        }
    }
}
