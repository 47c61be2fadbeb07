//! Package and path helpers for Java code generation

// External imports (alphabetized)
use once_cell::sync::Lazy;
use regex::Regex;

static JAVA_PACKAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
        .expect("java package pattern is valid")
});

/// Whether `name` is a syntactically valid dotted Java package name
pub fn is_valid_package(name: &str) -> bool {
    JAVA_PACKAGE.is_match(name)
}

/// Folder a package's sources live in, relative to the output folder.
///
/// `("src/main/java", "io.swagger.client")` becomes
/// `src/main/java/io/swagger/client`. Dots are replaced across the whole
/// joined path, source folder included.
pub fn package_folder(source_folder: &str, package: &str) -> String {
    let joined = if source_folder.is_empty() {
        package.to_string()
    } else {
        format!("{}/{}", source_folder, package)
    };
    joined.replace('.', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_package() {
        assert!(is_valid_package("io.swagger.client"));
        assert!(is_valid_package("com.example.api_v2"));
        assert!(is_valid_package("client"));
        assert!(!is_valid_package(""));
        assert!(!is_valid_package("io..client"));
        assert!(!is_valid_package("io.swagger."));
        assert!(!is_valid_package("io.1client"));
        assert!(!is_valid_package("io/swagger"));
    }

    #[test]
    fn test_package_folder() {
        assert_eq!(
            package_folder("src/main/java", "io.swagger.client"),
            "src/main/java/io/swagger/client"
        );
        assert_eq!(package_folder("", "com.example"), "com/example");
        assert_eq!(package_folder("src.gen", "api"), "src/gen/api");
    }
}
