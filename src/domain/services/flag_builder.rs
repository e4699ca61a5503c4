//! Flag Builder
//!
//! Turns filters, mirror options and a direction into the ordered argument
//! list of the `mirror` directive. No validation happens here; malformed
//! paths or globs are the config loader's problem.

use crate::domain::entities::{MirrorArg, MirrorInvocation};
use crate::domain::value_objects::{
    Direction, FlagValue, MirrorFilters, MirrorOptions, PassthroughFlags,
};

const BASE_SWITCHES: &[&str] = &[
    "--continue",
    "--only-newer",
    "--overwrite",
    "--use-cache",
    "--delete",
    "--verbose",
];

/// Builds mirror invocations from resolved settings
#[derive(Debug, Clone, Copy)]
pub struct FlagBuilder<'a> {
    filters: &'a MirrorFilters,
    options: &'a MirrorOptions,
}

impl<'a> FlagBuilder<'a> {
    pub fn new(filters: &'a MirrorFilters, options: &'a MirrorOptions) -> Self {
        Self { filters, options }
    }

    /// Arguments for a committed transfer
    pub fn flags(&self, direction: Direction) -> Vec<MirrorArg> {
        self.build(direction, false)
    }

    /// Arguments for a preview run that only reports would-be changes
    pub fn preview_flags(&self, direction: Direction) -> Vec<MirrorArg> {
        self.build(direction, true)
    }

    /// Full mirror directive between a local path and a remote path.
    ///
    /// Push mirrors `local` onto `remote`; pull mirrors `remote` onto `local`.
    pub fn invocation(
        &self,
        direction: Direction,
        local: &str,
        remote: &str,
        simulate: bool,
    ) -> MirrorInvocation {
        let args = self.build(direction, simulate);
        match direction {
            Direction::Push => MirrorInvocation::new(args, local, remote),
            Direction::Pull => MirrorInvocation::new(args, remote, local),
        }
    }

    fn build(&self, direction: Direction, simulate: bool) -> Vec<MirrorArg> {
        let mut args: Vec<MirrorArg> = BASE_SWITCHES
            .iter()
            .map(|flag| MirrorArg::switch(*flag))
            .collect();

        args.push(MirrorArg::joined(
            "--parallel",
            self.options.parallel.to_string(),
        ));
        if self.options.dereference {
            args.push(MirrorArg::switch("--dereference"));
        }
        if direction.is_push() {
            args.push(MirrorArg::switch("--reverse"));
        }

        // Broad excludes first so the narrower includes can re-admit paths.
        args.extend(
            self.filters
                .exclude
                .iter()
                .map(|path| MirrorArg::valued("--exclude", path)),
        );
        args.extend(
            self.filters
                .exclude_glob
                .iter()
                .map(|glob| MirrorArg::valued("--exclude-glob", glob)),
        );
        args.extend(
            self.filters
                .include_glob
                .iter()
                .map(|glob| MirrorArg::valued("--include-glob", glob)),
        );
        args.extend(
            self.filters
                .include
                .iter()
                .map(|path| MirrorArg::valued("--include", path)),
        );

        if simulate {
            args.push(MirrorArg::switch("--dry-run"));
        }

        args.extend(passthrough_args(&self.options.passthrough));
        args
    }
}

/// Render operator-supplied flags; they always come last so they can override.
pub fn passthrough_args(flags: &PassthroughFlags) -> Vec<MirrorArg> {
    match flags {
        PassthroughFlags::List(list) => list.iter().map(MirrorArg::raw).collect(),
        PassthroughFlags::Map(map) => map
            .iter()
            .filter_map(|(flag, value)| {
                let flag = normalize_flag(flag);
                match value {
                    FlagValue::Bool(false) => None,
                    FlagValue::Bool(true) => Some(MirrorArg::switch(flag)),
                    other => Some(MirrorArg::valued(flag, other.to_string())),
                }
            })
            .collect(),
    }
}

fn normalize_flag(flag: &str) -> String {
    if flag.starts_with('-') {
        flag.to_string()
    } else {
        format!("--{}", flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn tokens(args: &[MirrorArg]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn default_flags_for_pull() {
        let filters = MirrorFilters::default();
        let options = MirrorOptions::default();
        let args = FlagBuilder::new(&filters, &options).flags(Direction::Pull);
        assert_eq!(
            tokens(&args),
            vec![
                "--continue",
                "--only-newer",
                "--overwrite",
                "--use-cache",
                "--delete",
                "--verbose",
                "--parallel=10",
                "--dereference",
            ]
        );
    }

    #[test]
    fn push_adds_reverse() {
        let filters = MirrorFilters::default();
        let options = MirrorOptions::default();
        let args = FlagBuilder::new(&filters, &options).flags(Direction::Push);
        assert_eq!(args.last(), Some(&MirrorArg::switch("--reverse")));
    }

    #[test]
    fn filters_follow_documented_order() {
        let filters = MirrorFilters {
            exclude: vec!["^node_modules/".to_string()],
            exclude_glob: vec![".*".to_string()],
            include: vec![".htpasswd".to_string()],
            include_glob: vec![".htaccess".to_string()],
        };
        let options = MirrorOptions::default();
        let args = FlagBuilder::new(&filters, &options).flags(Direction::Push);
        let tail: Vec<String> = tokens(&args).into_iter().skip(9).collect();
        assert_eq!(
            tail,
            vec![
                "--exclude ^node_modules/",
                "--exclude-glob .*",
                "--include-glob .htaccess",
                "--include .htpasswd",
            ]
        );
    }

    #[test]
    fn parallel_and_dereference_are_configurable() {
        let filters = MirrorFilters::default();
        let options = MirrorOptions {
            parallel: 3,
            dereference: false,
            passthrough: PassthroughFlags::default(),
        };
        let args = tokens(&FlagBuilder::new(&filters, &options).flags(Direction::Pull));
        assert!(args.contains(&"--parallel=3".to_string()));
        assert!(!args.contains(&"--dereference".to_string()));
    }

    #[test]
    fn preview_adds_dry_run_before_passthrough() {
        let filters = MirrorFilters::default();
        let options = MirrorOptions {
            passthrough: PassthroughFlags::List(vec!["--no-perms".to_string()]),
            ..MirrorOptions::default()
        };
        let args = tokens(&FlagBuilder::new(&filters, &options).preview_flags(Direction::Push));
        let n = args.len();
        assert_eq!(args[n - 2], "--dry-run");
        assert_eq!(args[n - 1], "--no-perms");
    }

    #[test]
    fn map_passthrough_omits_false_and_renders_values() {
        let mut map = BTreeMap::new();
        map.insert("--ignore-time".to_string(), FlagValue::Bool(false));
        map.insert("--no-perms".to_string(), FlagValue::Bool(true));
        map.insert("--parallel".to_string(), FlagValue::Integer(2));
        map.insert("log".to_string(), FlagValue::Text("m.log".to_string()));
        let args = tokens(&passthrough_args(&PassthroughFlags::Map(map)));
        assert_eq!(args, vec!["--log m.log", "--no-perms", "--parallel 2"]);
    }

    #[test]
    fn invocation_swaps_operands_for_pull() {
        let filters = MirrorFilters::default();
        let options = MirrorOptions::default();
        let builder = FlagBuilder::new(&filters, &options);

        let push = builder.invocation(Direction::Push, "./content/", "./www/content", false);
        assert_eq!(push.source(), "./content/");
        assert_eq!(push.destination(), "./www/content");

        let pull = builder.invocation(Direction::Pull, "./content/", "./www/content", false);
        assert_eq!(pull.source(), "./www/content");
        assert_eq!(pull.destination(), "./content/");
    }

    #[test]
    fn duplicate_user_entries_are_kept() {
        let filters = MirrorFilters {
            exclude: vec!["a".to_string(), "a".to_string()],
            ..MirrorFilters::default()
        };
        let options = MirrorOptions::default();
        let args = tokens(&FlagBuilder::new(&filters, &options).flags(Direction::Pull));
        assert_eq!(args.iter().filter(|a| *a == "--exclude a").count(), 2);
    }
}
