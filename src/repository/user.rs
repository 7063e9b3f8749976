use diesel::dsl::{exists, select};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::user::{NewUser as DomainNewUser, UpdateUser as DomainUpdateUser, User as DomainUser},
    models::user::{NewUser as DbNewUser, UpdateUser as DbUpdateUser, User as DbUser},
    repository::errors::{RepositoryError, RepositoryResult},
    repository::message_tag,
    repository::{DieselRepository, UserReader, UserWriter},
};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::id.eq(id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn list_users(&self) -> RepositoryResult<Vec<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_users = users::table
            .order(users::id.asc())
            .load::<DbUser>(&mut conn)?;

        Ok(db_users.into_iter().map(Into::into).collect())
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_new = DbNewUser::from(new_user);

        let created = diesel::insert_into(users::table)
            .values(&db_new)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn update_user(
        &self,
        user_id: i32,
        updates: &DomainUpdateUser,
    ) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateUser::from(updates);

        let updated = diesel::update(users::table.filter(users::id.eq(user_id)))
            .set(&db_updates)
            .get_result::<DbUser>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_user(&self, user_id: i32) -> RepositoryResult<()> {
        use crate::schema::{messages, users};

        let mut conn = self.conn()?;

        conn.immediate_transaction::<(), RepositoryError, _>(|conn| {
            let message_ids = messages::table
                .filter(messages::user_id.eq(user_id))
                .select(messages::id)
                .load::<i32>(conn)?;

            message_tag::remove_pairs_for_messages(conn, &message_ids)?;

            diesel::delete(messages::table.filter(messages::user_id.eq(user_id))).execute(conn)?;

            let deleted = diesel::delete(users::table.filter(users::id.eq(user_id))).execute(conn)?;
            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

/// Fails with `NotFound` unless a user with `user_id` is stored.
pub(crate) fn ensure_user_exists(
    conn: &mut SqliteConnection,
    user_id: i32,
) -> RepositoryResult<()> {
    use crate::schema::users;

    let exists = select(exists(users::table.filter(users::id.eq(user_id)))).get_result(conn)?;

    if exists {
        Ok(())
    } else {
        Err(RepositoryError::NotFound)
    }
}
