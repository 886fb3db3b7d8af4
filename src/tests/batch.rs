#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::processed;
    use crate::tests::toolkit::{Rinex2Builder, TestWorkspace};

    /// Populates the daily RINEX folder with 3 valid files and a corrupt one
    fn setup(workspace: &TestWorkspace) -> PathContext {
        let ctx = PathContext::new(2014, 15, &workspace.root).unwrap();
        for (station, model) in [
            ("alar", "TRIMBLE NETR5"),
            ("bele", "SEPT POLARX5"),
            ("ceeu", "LEICA GR10"),
        ] {
            let mut builder = Rinex2Builder::new(&["G01", "G02"], 3);
            builder.rx_model = model.to_string();
            TestWorkspace::write(&ctx.rinex_file(station), &builder.build());
        }
        TestWorkspace::write(&ctx.rinex_file("brft"), "corrupted content\n");
        // ignored: not a daily observation file
        TestWorkspace::write(&ctx.rinex().join("readme.txt"), "hello");
        ctx
    }
    #[test]
    fn corrupt_files_are_skipped() {
        let workspace = TestWorkspace::new();
        let ctx = setup(&workspace);

        let report = run_for_all_files(&ctx, &FileLoader::default(), None).unwrap();

        assert_eq!(report.outputs.len(), 3);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, ctx.rinex_file("brft"));

        assert_eq!(
            report.outputs,
            vec![
                ctx.process_file("alar"),
                ctx.process_file("bele"),
                ctx.process_file("ceeu"),
            ]
        );

        for output in report.outputs.iter() {
            let frame = processed::read(output).unwrap();
            assert_eq!(frame.len(), 6);
        }

        assert_eq!(report.attributes.len(), 3);
        assert_eq!(
            report.attributes.get("bele").unwrap().rxmodel,
            "SEPT POLARX5"
        );

        let json = report.save_attributes(&ctx).unwrap();
        assert_eq!(json, ctx.json_file());

        let summary = AttributeSummary::from_file(&json).unwrap();
        assert_eq!(summary, report.attributes);
        assert_eq!(
            summary.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
            vec!["alar", "bele", "ceeu"]
        );
    }
    #[test]
    fn limited_batch() {
        let workspace = TestWorkspace::new();
        let ctx = setup(&workspace);

        // sorted: alar, bele, brft, ceeu, readme
        let report = run_for_all_files(&ctx, &FileLoader::default(), Some(3)).unwrap();
        assert_eq!(report.outputs.len(), 2);
        assert_eq!(report.skipped.len(), 1);

        let report = run_for_all_files(&ctx, &FileLoader::default(), Some(0)).unwrap();
        assert!(report.outputs.is_empty());
        assert!(report.skipped.is_empty());
    }
    #[test]
    fn missing_input_directory() {
        let workspace = TestWorkspace::new();
        let ctx = PathContext::new(2014, 16, &workspace.root).unwrap();
        assert!(run_for_all_files(&ctx, &FileLoader::default(), None).is_err());
    }
}
