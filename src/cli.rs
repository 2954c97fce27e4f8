use clap::{crate_version, App, AppSettings, Arg};

pub mod arg {
    pub static CONFIG: &str = "config";
    pub static CSS: &str = "css";
    pub static VERBOSITY: &str = "verbosity";
    pub static ONCE: &str = "once";
    pub static CLEAN: &str = "clean";
    pub static TARGETS: &str = "targets";
}

pub static DEFAULT_CONFIG_FILE: &str = "/config/pdfs.yml";
pub static DEFAULT_CSS_FILE: &str = "/config/styles.css";

pub fn get_app() -> App<'static, 'static> {
    App::new("Pressroom")
        .version(crate_version!())
        .about("Keep HTML and PDF renditions of your documents fresh")
        .arg(
            Arg::with_name(arg::CONFIG)
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG_FILE)
                .help("File describing the pdf targets to build"),
        )
        .arg(
            Arg::with_name(arg::CSS)
                .long("css")
                .takes_value(true)
                .value_name("FILE")
                .default_value(DEFAULT_CSS_FILE)
                .help("Stylesheet handed to the renderer when the file exists"),
        )
        .arg(
            Arg::with_name(arg::VERBOSITY)
                .short("v")
                .multiple(true)
                .takes_value(false)
                .help("Increases message verbosity"),
        )
        .arg(
            Arg::with_name(arg::ONCE)
                .long("once")
                .help("Build all targets once and exit instead of watching"),
        )
        .arg(
            Arg::with_name(arg::CLEAN)
                .long("clean")
                .help("Start by removing the target outputs"),
        )
        .arg(
            Arg::with_name(arg::TARGETS)
                .value_name("TARGETS")
                .multiple(true)
                .help("Restrict the run to these targets"),
        )
        .setting(AppSettings::ColoredHelp)
}

#[cfg(test)]
mod tests {
    use super::{arg, get_app, DEFAULT_CONFIG_FILE};

    #[test]
    fn test_get_app_verbosity_is_optional() {
        let arg_matches = get_app().get_matches_from(vec!["pressroom"]);
        assert_eq!(arg_matches.occurrences_of(arg::VERBOSITY), 0);
    }

    #[test]
    fn test_get_app_verbosity_accepts_multiple_occurrences() {
        let arg_matches = get_app().get_matches_from(vec!["pressroom", "-vvv"]);
        assert_eq!(arg_matches.occurrences_of(arg::VERBOSITY), 3);
    }

    #[test]
    fn test_get_app_config_has_a_default() {
        let arg_matches = get_app().get_matches_from(vec!["pressroom"]);
        assert_eq!(arg_matches.value_of(arg::CONFIG), Some(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_get_app_targets_are_positional() {
        let arg_matches = get_app().get_matches_from(vec!["pressroom", "-v", "handbook"]);
        assert_eq!(arg_matches.occurrences_of(arg::VERBOSITY), 1);
        assert_eq!(
            arg_matches.values_of_lossy(arg::TARGETS),
            Some(vec!["handbook".to_string()])
        );
    }
}
