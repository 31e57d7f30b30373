//! Integration tests for error types

#[cfg(test)]
mod tests {
    use filebay_errors::*;

    #[test]
    fn test_error_conversion() {
        let range_err = RangeError::not_satisfiable("bytes=2000-", 1000);
        let err: Error = range_err.into();
        assert!(matches!(err, Error::Range(_)));
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::FileNotFound {
            path: "/srv/downloads/report.pdf".into(),
        };
        assert_eq!(
            err.to_string(),
            "file not found: /srv/downloads/report.pdf"
        );
    }

    #[test]
    fn test_error_clone() {
        let err = StreamError::Truncated { expected: 512 };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let storage_err =
            StorageError::from_io_with_path(&io_err, std::path::Path::new("/tmp/missing"));
        assert!(matches!(storage_err, StorageError::FileNotFound { .. }));
    }

    #[test]
    fn test_status_hints() {
        let not_found: Error = StorageError::FileNotFound { path: "x".into() }.into();
        assert_eq!(not_found.status_hint(), Some(404));

        let unsatisfiable: Error = RangeError::not_satisfiable("bytes=-0", 10).into();
        assert_eq!(unsatisfiable.status_hint(), Some(416));

        let mid_stream: Error = StreamError::Truncated { expected: 1 }.into();
        assert_eq!(mid_stream.status_hint(), None);
    }
}
