use super::model::{LockedSession, Order, OrderTicketRow, TakenSeat, Ticket};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

pub struct OrderRepository;

impl OrderRepository {
    pub async fn count_for_user(pool: &PgPool, user_id: Uuid) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    pub async fn page_for_user(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> sqlx::Result<Vec<Order>> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, user_id, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    pub async fn tickets_for(pool: &PgPool, order_ids: &[i64]) -> sqlx::Result<Vec<OrderTicketRow>> {
        sqlx::query_as::<_, OrderTicketRow>(
            r#"
            SELECT
                t.id,
                t.order_id,
                t.row,
                t.seat,
                ms.id AS movie_session_id,
                ms.show_time,
                m.title AS movie_title,
                ch.name AS cinema_hall_name,
                ch.rows,
                ch.seats_in_row
            FROM tickets t
            JOIN movie_sessions ms ON ms.id = t.movie_session_id
            JOIN movies m ON m.id = ms.movie_id
            JOIN cinema_halls ch ON ch.id = ms.cinema_hall_id
            WHERE t.order_id = ANY($1)
            ORDER BY t.id
            "#,
        )
        .bind(order_ids)
        .fetch_all(pool)
        .await
    }

    /// Locks the session rows in id order so that concurrent orders touching the
    /// same sessions queue up instead of deadlocking.
    pub async fn lock_sessions(conn: &mut PgConnection, session_ids: &[i64]) -> sqlx::Result<Vec<LockedSession>> {
        sqlx::query_as::<_, LockedSession>(
            r#"
            SELECT ms.id, ch.rows, ch.seats_in_row
            FROM movie_sessions ms
            JOIN cinema_halls ch ON ch.id = ms.cinema_hall_id
            WHERE ms.id = ANY($1)
            ORDER BY ms.id
            FOR UPDATE OF ms
            "#,
        )
        .bind(session_ids)
        .fetch_all(conn)
        .await
    }

    /// Must run after `lock_sessions` in the same transaction to see every
    /// committed ticket.
    pub async fn sold_counts(conn: &mut PgConnection, session_ids: &[i64]) -> sqlx::Result<Vec<(i64, i64)>> {
        sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT movie_session_id, COUNT(*)
            FROM tickets
            WHERE movie_session_id = ANY($1)
            GROUP BY movie_session_id
            "#,
        )
        .bind(session_ids)
        .fetch_all(conn)
        .await
    }

    pub async fn taken_among(
        conn: &mut PgConnection,
        session_ids: &[i64],
        rows: &[i32],
        seats: &[i32],
    ) -> sqlx::Result<Vec<TakenSeat>> {
        sqlx::query_as::<_, TakenSeat>(
            r#"
            SELECT t.movie_session_id, t.row, t.seat
            FROM tickets t
            JOIN unnest($1::bigint[], $2::int[], $3::int[]) AS req(movie_session_id, row, seat)
                ON req.movie_session_id = t.movie_session_id
                AND req.row = t.row
                AND req.seat = t.seat
            ORDER BY t.movie_session_id, t.row, t.seat
            "#,
        )
        .bind(session_ids)
        .bind(rows)
        .bind(seats)
        .fetch_all(conn)
        .await
    }

    pub async fn create(conn: &mut PgConnection, user_id: Uuid) -> sqlx::Result<Order> {
        sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (user_id)
            VALUES ($1)
            RETURNING id, user_id, created_at
            "#,
        )
        .bind(user_id)
        .fetch_one(conn)
        .await
    }

    pub async fn insert_tickets(
        conn: &mut PgConnection,
        order_id: i64,
        session_ids: &[i64],
        rows: &[i32],
        seats: &[i32],
    ) -> sqlx::Result<Vec<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (movie_session_id, order_id, row, seat)
            SELECT req.movie_session_id, $1, req.row, req.seat
            FROM unnest($2::bigint[], $3::int[], $4::int[]) AS req(movie_session_id, row, seat)
            RETURNING id, movie_session_id, order_id, row, seat
            "#,
        )
        .bind(order_id)
        .bind(session_ids)
        .bind(rows)
        .bind(seats)
        .fetch_all(conn)
        .await
    }
}
