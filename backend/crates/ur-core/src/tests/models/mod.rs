mod new_user;
