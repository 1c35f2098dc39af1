mod add_aws_contract;
mod add_firebase_contract;
mod dry_run_contract;
mod failure_contract;
mod idempotence_contract;
mod install_contract;
mod options_file_contract;
mod provider_switch_contract;
mod static_project_contract;
mod status_contract;
