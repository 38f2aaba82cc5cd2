#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["lng", "build"]).unwrap();
        match cli.command {
            Command::Build(args) => {
                assert!(args.config.is_none());
                assert!(args.out_dir.is_none());
                assert!(!args.es6 && !args.es5);
                assert!(!args.no_sourcemaps);
                assert!(!args.copy_src);
            }
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::try_parse_from([
            "lng",
            "build",
            "--es5",
            "--no-sourcemaps",
            "--copy-src",
            "-d",
            "dist",
            "--cwd",
            "/apps/demo",
        ])
        .unwrap();
        match cli.command {
            Command::Build(args) => {
                assert!(args.es5);
                assert!(args.no_sourcemaps);
                assert!(args.copy_src);
                assert_eq!(args.out_dir, Some(PathBuf::from("dist")));
                assert_eq!(args.cwd, Some(PathBuf::from("/apps/demo")));
            }
            other => panic!("expected build, got {other:?}"),
        }
    }

    #[test]
    fn test_es6_and_es5_conflict() {
        assert!(Cli::try_parse_from(["lng", "build", "--es6", "--es5"]).is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["lng", "-v", "-q", "info"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lng", "check", "--verbose", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn test_resolve_requires_import() {
        assert!(Cli::try_parse_from(["lng", "resolve"]).is_err());

        let cli = Cli::try_parse_from(["lng", "resolve", "@/utils", "--importer", "src/App.js"])
            .unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.import, "@/utils");
                assert_eq!(args.importer, "src/App.js");
            }
            other => panic!("expected resolve, got {other:?}"),
        }
    }
}
