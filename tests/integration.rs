#[cfg(test)]
mod integration_tests {
    use gpuname::prelude::*;
    use gpuname::{NoopObserver, NO_GPU_FOUND};
    use mockall::mock;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::{self, Write};

    mock! {
        Profiler {}

        impl CommandRunner for Profiler {
            fn run(&self, program: &str, args: &[String]) -> io::Result<Vec<u8>>;
        }
    }

    fn lines(lines: &[&str]) -> String {
        lines.join("\n")
    }

    fn resolve_bytes(output: Vec<u8>) -> String {
        let mut profiler = MockProfiler::new();
        profiler
            .expect_run()
            .with(eq("/usr/sbin/system_profiler"), eq(vec!["SPDisplaysDataType".to_string()]))
            .times(1)
            .return_once(move |_, _| Ok(output));

        GpuNameResolver::new()
            .with_runner(profiler)
            .with_observer(NoopObserver)
            .resolve()
    }

    fn resolve_text(output: &str) -> String {
        resolve_bytes(output.as_bytes().to_vec())
    }

    #[test]
    fn test_library_initialization() {
        assert!(!gpuname::version().is_empty());
    }

    #[test]
    fn test_discrete_and_integrated() {
        let output = lines(&[
            "Graphics/Displays:",
            "      Chipset Model: Intel UHD Graphics 630",
            "      Bus: Built-In",
            "      Chipset Model: Radeon Pro 560X",
            "      Bus: PCIe",
        ]);
        assert_eq!(resolve_text(&output), "Radeon Pro 560X");
    }

    #[test]
    fn test_integrated_only() {
        let output = lines(&[
            "Graphics/Displays:",
            "      Chipset Model: Intel UHD Graphics 630",
            "      Bus: Built-In",
        ]);
        assert_eq!(resolve_text(&output), "Intel UHD Graphics 630");
    }

    #[test]
    fn test_not_graphics_data() {
        assert_eq!(resolve_text("Not Graphics Data"), "");
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(resolve_text(""), "");
    }

    #[test]
    fn test_invalid_utf8() {
        let mut output = b"Graphics/Displays:\n      Chipset Model: ".to_vec();
        output.extend_from_slice(&[0xff, 0xfe, 0xfd]);
        assert_eq!(resolve_bytes(output), "");
    }

    #[test]
    fn test_header_without_blocks() {
        let output = lines(&["Graphics/Displays:", "    Displays:", "  Nothing:"]);
        assert_eq!(resolve_text(&output), NO_GPU_FOUND);
    }

    #[rstest]
    #[case(&["Intel Iris Plus Graphics 655"], "Intel Iris Plus Graphics 655")]
    #[case(&["Intel HD Graphics 530", "Apple M1"], "Intel HD Graphics 530")]
    fn test_all_built_in_returns_first(#[case] names: &[&str], #[case] expected: &str) {
        let mut report = vec!["Graphics/Displays:".to_string()];
        for name in names {
            report.push(format!("    {}:", name));
            report.push(format!("      Chipset Model: {}", name));
            report.push("      Bus: Built-In".to_string());
        }
        assert_eq!(resolve_text(&report.join("\n")), expected);
    }

    #[test]
    fn test_last_discrete_wins_across_blocks() {
        let output = lines(&[
            "Graphics/Displays:",
            "    NVIDIA GeForce GT 750M:",
            "      Chipset Model: NVIDIA GeForce GT 750M",
            "      Bus: PCIe",
            "    Intel Iris Pro:",
            "      Chipset Model: Intel Iris Pro",
            "      Bus: Built-In",
            "    AMD Radeon RX 580:",
            "      Chipset Model: AMD Radeon RX 580",
            "      Bus: PCIe",
        ]);
        assert_eq!(resolve_text(&output), "AMD Radeon RX 580");
    }

    #[test]
    fn test_spawn_failure() {
        let mut profiler = MockProfiler::new();
        profiler
            .expect_run()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::NotFound, "missing")));

        let resolver = GpuNameResolver::new()
            .with_runner(profiler)
            .with_observer(NoopObserver);
        assert_eq!(resolver.resolve(), "");
    }

    #[test]
    fn test_configured_program_is_invoked() {
        let mut profiler = MockProfiler::new();
        profiler
            .expect_run()
            .withf(|program, args| {
                program == "/opt/bin/profiler" && args.len() == 1 && args[0] == "SPDisplaysDataType"
            })
            .times(1)
            .returning(|_, _| Ok(b"Graphics/Displays:\n      Bus: PCIe\n".to_vec()));

        let config = ResolverConfig::with_program("/opt/bin/profiler");
        let resolver = GpuNameResolver::with_config(config)
            .with_runner(profiler)
            .with_observer(NoopObserver);

        // Discrete adapter with no chipset line
        assert_eq!(resolver.resolve(), "");
    }

    #[test]
    fn test_saved_report_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Graphics/Displays:").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "    Apple M1 Max:").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "      Chipset Model: Apple M1 Max").unwrap();
        writeln!(file, "      Type: GPU").unwrap();
        writeln!(file, "      Bus: Built-In").unwrap();
        writeln!(file, "      Total Number of Cores: 32").unwrap();
        writeln!(file, "      Displays:").unwrap();
        writeln!(file, "        Color LCD:").unwrap();
        writeln!(file, "          Connection Type: Internal").unwrap();
        file.flush().unwrap();

        let resolution = GpuNameResolver::new()
            .with_runner(ReplayRunner::from_file(file.path()).unwrap())
            .with_observer(NoopObserver)
            .try_resolve()
            .unwrap();

        assert_eq!(resolution.name, "Apple M1 Max");
        assert_eq!(resolution.adapters, vec![AdapterRecord::new("Apple M1 Max", "Built-In")]);
    }

    #[test]
    fn test_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"program": "/opt/bin/profiler", "indent": 4}}"#).unwrap();
        file.flush().unwrap();

        let config = ResolverConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.program, "/opt/bin/profiler");
        assert_eq!(config.indent, 4);
        assert_eq!(config.args, vec!["SPDisplaysDataType".to_string()]);
    }
}
