mod create_user_request;
