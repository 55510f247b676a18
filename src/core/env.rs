pub trait Environment {
    fn read_file(&mut self, path: &str) -> std::io::Result<String>;
}

pub struct EmptyEnvironment;

impl Environment for EmptyEnvironment {
    fn read_file(&mut self, _: &str) -> std::io::Result<String> {
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File not found",
        ))
    }
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn read_file(&mut self, path: &str) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
