use learn_git::App;
use learn_git::config::AppConfig;
use leptos::prelude::*;

fn main() {
	learn_git::init_logging(&AppConfig::from_build_env());
	mount_to_body(App);
}
