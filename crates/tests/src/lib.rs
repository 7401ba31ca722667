#[cfg(test)]
mod common;

#[cfg(test)]
mod exchange_submit_tests;

#[cfg(test)]
mod exchange_validation_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod rate_limit_tests;
