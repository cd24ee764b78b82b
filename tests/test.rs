#[cfg(test)]
mod tests {
    use simpletron_mem::{cell::Cell, config::Config, memory::MemoryError, simpletron::Simpletron};

    fn machine(size: usize) -> Simpletron {
        Simpletron::new(&Config {
            size,
            log_file_path: None,
        })
        .unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let mut machine = machine(10);

        machine.store("00", "hello").unwrap();
        machine.store("45", "world").unwrap();

        let dump = machine.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 11);

        // Header, then banks 00..90 in order.
        assert!(lines[0].trim_start().starts_with('0'));
        assert!(lines[1].starts_with("00"));
        assert!(lines[5].starts_with("40"));

        // "hello" sits in bank 00 slot 0, "world" in bank 40 slot 5.
        assert_eq!(lines[1].split_whitespace().nth(1), Some("hello"));
        assert_eq!(lines[5].split_whitespace().nth(6), Some("world"));

        // Every other cell still holds the zero instruction.
        assert_eq!(dump.matches("+0000").count(), 98);

        assert_eq!(
            machine.read("45").unwrap(),
            &Cell::Data("world".to_owned())
        );
    }

    #[test]
    fn test_zero_size_is_rejected_at_construction() {
        let result = Simpletron::new(&Config {
            size: 0,
            log_file_path: None,
        });

        assert!(matches!(
            result,
            Err(MemoryError::InvalidSize { given: 0 })
        ));
    }

    #[test]
    fn test_errors_surface_through_the_machine() {
        let mut machine = machine(3);

        assert!(matches!(
            machine.store("71", "x"),
            Err(MemoryError::UnknownBank { .. })
        ));
        assert!(matches!(
            machine.store("17", "x"),
            Err(MemoryError::SlotOutOfRange { .. })
        ));
        assert!(matches!(
            machine.read("not-an-address"),
            Err(MemoryError::Decode(_))
        ));
    }

    #[test]
    fn test_checksum_tracks_the_grid() {
        let mut machine = machine(5);
        let fresh = machine.checksum();

        assert_eq!(fresh, machine.checksum());

        machine.store("23", "dirty").unwrap();
        assert_ne!(fresh, machine.checksum());
    }
}
