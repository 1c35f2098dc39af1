mod public_api_contract;
