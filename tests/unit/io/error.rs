//! Tests for error construction, display and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilecollapse::io::error::{AlgorithmError, invalid_parameter, require_positive};

    // Tests invalid parameter errors carry name, value and reason
    // Verified by swapping value and reason in the message
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("width", &0, &"must be greater than zero");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width' = '0': must be greater than zero"
        );
        assert!(err.source().is_none());
    }

    // Tests zero is rejected and other values pass through
    // Verified by accepting zero
    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("height", 7).ok(), Some(7));
        assert!(matches!(
            require_positive("height", 0),
            Err(AlgorithmError::InvalidParameter {
                parameter: "height",
                ..
            })
        ));
    }

    // Tests display text of solver-side errors
    // Verified by changing the message templates
    #[test]
    fn test_display_messages() {
        let err = AlgorithmError::RestartLimitExceeded { attempts: 4 };
        assert!(err.to_string().contains("after 4 attempts"));

        let err = AlgorithmError::InvalidTileIndex {
            index: 9,
            max_tiles: 3,
        };
        assert_eq!(err.to_string(), "Tile index 9 is out of bounds (3 tiles)");

        let err = AlgorithmError::InvalidSourceData {
            reason: "empty example".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid source data: empty example");
    }

    // Tests I/O failures keep their underlying cause
    // Verified by returning None from source
    #[test]
    fn test_io_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AlgorithmError::from(io_error);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing"));

        let err = AlgorithmError::FileSystem {
            path: PathBuf::from("out"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert!(err.to_string().contains("create directory on 'out'"));
    }
}
