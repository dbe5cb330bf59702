mod holding;

pub use holding::Holding;

#[cfg(test)]
mod tests;
