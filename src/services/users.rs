use crate::domain::user::User;
use crate::forms::users::UserForm;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists every user ordered by id.
pub fn load_users<R>(repo: &R) -> ServiceResult<Vec<User>>
where
    R: UserReader + ?Sized,
{
    repo.list_users().map_err(ServiceError::from)
}

/// Fetches a single user, failing with `NotFound` for unknown ids.
pub fn load_user<R>(repo: &R, user_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a user from the submitted form.
pub fn create_user<R>(repo: &R, form: UserForm) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let new_user = form
        .into_new_user()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_user(&new_user).map_err(ServiceError::from)
}

/// Overwrites the names and image of an existing user.
pub fn modify_user<R>(repo: &R, user_id: i32, form: UserForm) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let update = form
        .into_update_user()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_user(user_id, &update).map_err(ServiceError::from)
}

/// Deletes a user along with the messages it owns.
pub fn remove_user<R>(repo: &R, user_id: i32) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    repo.delete_user(user_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::{MockUserReader, MockUserWriter};
    use crate::services::test_support::sample_user;

    fn juan_form() -> UserForm {
        UserForm {
            first_name: " Juan ".to_string(),
            last_name: "Rocha".to_string(),
            image: Some(String::new()),
        }
    }

    #[test]
    fn load_users_returns_repository_order() {
        let mut repo = MockUserReader::new();
        repo.expect_list_users()
            .times(1)
            .returning(|| {
                Ok(vec![
                    sample_user(1, "Ana", "Diaz"),
                    sample_user(2, "Juan", "Rocha"),
                ])
            });

        let users = load_users(&repo).expect("expected success");

        let ids: Vec<i32> = users.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn load_user_reports_missing_user() {
        let mut repo = MockUserReader::new();
        repo.expect_get_user_by_id()
            .withf(|id| *id == 1909)
            .returning(|_| Ok(None));

        let result = load_user(&repo, 1909);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_user_sanitizes_and_persists() {
        let mut repo = MockUserWriter::new();
        repo.expect_create_user()
            .times(1)
            .withf(|new_user| {
                assert_eq!(new_user.first_name, "Juan");
                assert_eq!(new_user.last_name, "Rocha");
                assert_eq!(new_user.image, None);
                true
            })
            .returning(|_| Ok(sample_user(3, "Juan", "Rocha")));

        let created = create_user(&repo, juan_form()).expect("expected success");

        assert_eq!(created.id, 3);
        assert_eq!(created.full_name(), "Juan Rocha");
    }

    #[test]
    fn modify_user_overwrites_all_fields() {
        let mut repo = MockUserWriter::new();
        repo.expect_update_user()
            .times(1)
            .withf(|user_id, updates| {
                assert_eq!(*user_id, 5);
                assert_eq!(updates.first_name, "Stella");
                assert_eq!(updates.last_name, "Wilches");
                assert_eq!(updates.image.as_deref(), Some("/img/stella.png"));
                true
            })
            .returning(|_, _| Ok(sample_user(5, "Stella", "Wilches")));

        let form = UserForm {
            first_name: "Stella".to_string(),
            last_name: "Wilches".to_string(),
            image: Some("/img/stella.png".to_string()),
        };

        let updated = modify_user(&repo, 5, form).expect("expected success");

        assert_eq!(updated.first_name, "Stella");
    }

    #[test]
    fn modify_user_reports_missing_user() {
        let mut repo = MockUserWriter::new();
        repo.expect_update_user()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = modify_user(&repo, 42, juan_form());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn modify_user_returns_form_error() {
        let repo = MockUserWriter::new();
        let form = UserForm {
            first_name: "x".repeat(300),
            last_name: "Rocha".to_string(),
            image: None,
        };

        let result = modify_user(&repo, 1, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn remove_user_reports_missing_user() {
        let mut repo = MockUserWriter::new();
        repo.expect_delete_user()
            .times(1)
            .withf(|user_id| *user_id == 20)
            .returning(|_| Err(RepositoryError::NotFound));

        let result = remove_user(&repo, 20);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
