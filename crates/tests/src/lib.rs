#[cfg(test)]
mod common;

#[cfg(test)]
mod login_logout_tests;

#[cfg(test)]
mod guard_scenario_tests;

#[cfg(test)]
mod persistence_tests;

#[cfg(test)]
mod deferred_auth_tests;

#[cfg(test)]
mod api_error_tests;

#[cfg(test)]
mod config_tests;
