#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::processed;
    use crate::tests::toolkit::TestWorkspace;
    use std::fs::read_to_string;

    fn frame() -> ObservationFrame {
        let t0 = Epoch::from_gregorian(2014, 1, 15, 0, 0, 0, 0, TimeScale::GPST);
        (0..4)
            .flat_map(|i| {
                [1, 2].into_iter().map(move |prn| {
                    let key = ObsKey {
                        epoch: t0 + Duration::from_seconds(30.0 * i as f64),
                        sv: SV::new(Constellation::GPS, prn),
                    };
                    let row = ObservationRow {
                        l1: 110020464.178 + i as f64,
                        l2: 85730243.637 - i as f64,
                        c1: 20936094.387,
                        p2: 20936092.957 + 0.001 * i as f64,
                        l1_lli: if i == 2 { Some(1) } else { Some(0) },
                        l2_lli: if prn == 2 { None } else { Some(0) },
                    };
                    (key, row)
                })
            })
            .collect()
    }
    #[test]
    fn write_read_back() {
        let workspace = TestWorkspace::new();
        let path = workspace.root.join("alar.txt");

        let frame = frame();
        processed::write(&path, &frame).unwrap();

        let content = read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("time sv L1 L2 C1 P2 L1lli L2lli"));
        assert_eq!(
            lines.next(),
            Some("2014-01-15T00:00:00 G01 110020464.178 85730243.637 20936094.387 20936092.957 0 0")
        );
        assert_eq!(
            lines.next(),
            Some("2014-01-15T00:00:00 G02 110020464.178 85730243.637 20936094.387 20936092.957 0 nan")
        );

        let parsed = processed::read(&path).unwrap();
        assert_eq!(parsed, frame);
    }
    #[test]
    fn all_processed() {
        let workspace = TestWorkspace::new();
        let ctx = PathContext::new(2014, 15, &workspace.root).unwrap();
        create_directory(ctx.all_process()).unwrap();

        let frame = frame();
        processed::write(ctx.all_process_file("alar"), &frame).unwrap();

        let parsed = processed::read_all_processed(&ctx, "alar").unwrap();
        assert_eq!(parsed.satellites().len(), 2);
        assert_eq!(parsed.epochs().len(), 4);
        assert_eq!(parsed, frame);

        assert!(processed::read_all_processed(&ctx, "bele").is_err());
    }
    #[test]
    fn malformed_files() {
        let workspace = TestWorkspace::new();
        for (name, content) in [
            ("empty.txt", ""),
            ("header.txt", "time L1 L2\n"),
            (
                "row.txt",
                "time sv L1 L2 C1 P2 L1lli L2lli\n2014-01-15T00:00:00 G01 1.0 2.0\n",
            ),
        ] {
            let path = workspace.root.join(name);
            TestWorkspace::write(&path, content);
            assert!(processed::read(&path).is_err(), "{}", name);
        }
    }
}
